use clap::Parser;
use sitemap_builder::application::{BuildOptions, BuildSitemapService, Destination};
use sitemap_builder::cli::{format_config, format_outcome, Cli, Commands, SourceArgs};
use sitemap_builder::error::SitemapError;
use sitemap_builder::infrastructure::Config;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .format_timestamp(None)
        .init();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), SitemapError> {
    let base_dir = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &base_dir)?;

    match cli.command {
        Commands::Build {
            sources,
            output,
            disk,
            path,
            stdout,
        } => {
            let destination = if stdout {
                Destination::Stdout
            } else if let Some(name) = disk {
                Destination::Disk {
                    name,
                    path: path.unwrap_or_else(|| "sitemap.xml".to_string()),
                }
            } else if let Some(output) = output {
                Destination::File(output)
            } else {
                Destination::Default
            };

            let service = BuildSitemapService::new(config, base_dir);
            let outcome = service.execute(build_options(sources, destination))?;
            println!("{}", format_outcome(&outcome).trim_end());
            Ok(())
        }
        Commands::Show { sources } => {
            let service = BuildSitemapService::new(config, base_dir);
            let sitemap = service.collect(&build_options(sources, Destination::Stdout))?;
            print!("{}", sitemap.render()?);
            Ok(())
        }
        Commands::Config { list } => {
            print!("{}", format_config(&config, list));
            Ok(())
        }
    }
}

fn build_options(sources: SourceArgs, destination: Destination) -> BuildOptions {
    BuildOptions {
        entries: sources.entries,
        urls: sources.urls,
        destination,
    }
}
