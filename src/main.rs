use clap::Parser;
use miette::Result;
use orgdex::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::List(args) => orgdex::cli::commands::list::run(args, &global),
        Commands::Show(args) => orgdex::cli::commands::show::run(args, &global),
        Commands::Fav(cmd) => orgdex::cli::commands::fav::run(cmd, &global),
        Commands::Stats(args) => orgdex::cli::commands::stats::run(args, &global),
        Commands::Vocab(args) => orgdex::cli::commands::vocab::run(args, &global),
        Commands::Browse(args) => orgdex::cli::commands::browse::run(args, &global),
        Commands::Completions(args) => orgdex::cli::commands::completions::run(args),
    }
}
