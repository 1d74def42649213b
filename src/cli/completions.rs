use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appseed completions bash > ~/.bash_completion.d/appseed\n\n\
                  Generate zsh completions:\n    appseed completions zsh > ~/.zfunc/_appseed\n\n\
                  Generate fish completions:\n    appseed completions fish > ~/.config/fish/completions/appseed.fish\n\n\
                  Generate PowerShell completions:\n    appseed completions powershell")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
