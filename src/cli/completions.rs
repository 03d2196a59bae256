use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gpsync completions bash > ~/.bash_completion.d/gpsync\n\n\
                  Generate zsh completions:\n    gpsync completions zsh > ~/.zfunc/_gpsync\n\n\
                  Generate fish completions:\n    gpsync completions fish > ~/.config/fish/completions/gpsync.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
