use anyhow::{Context, Result, bail};
use clap::Parser;
use markdown_sitegen_cli::site;
use markdown_sitegen_config::Config;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "markdown-sitegen",
    version,
    about = "Build a static HTML site from a directory of markdown pages"
)]
struct Cli {
    /// URL prefix the site is served under, e.g. `/my-repo/`
    basepath: Option<String>,

    /// Config file to read instead of ~/.config/markdown-sitegen/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory of assets copied into the output as-is
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (cleared before every build)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the resolved settings back to the config file before building
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => match Config::load_from_path(path)? {
                Some(config) => Ok(config),
                None if self.save_config => Ok(Config::default()),
                None => bail!("Config file not found: {}", path.display()),
            },
            None => Ok(Config::load()?.unwrap_or_default()),
        }
    }

    /// Command-line values win over anything from the config file.
    fn apply(self, mut config: Config) -> Config {
        if let Some(basepath) = self.basepath {
            config.basepath = basepath;
        }
        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        config
    }
}

/// Loads the config file, applies flags on top and saves the result when
/// `--save-config` is given.
fn resolve_config(cli: Cli) -> Result<Config> {
    let config = cli.load_config()?;
    let save_to = cli.save_config.then(|| cli.config.clone());
    let config = cli.apply(config);

    if let Some(path) = save_to {
        let written = save_config(&config, path.as_deref())?;
        log::info!("Saved config to {}", written.display());
    }
    Ok(config)
}

fn save_config(config: &Config, path: Option<&Path>) -> Result<PathBuf> {
    let path = match path {
        Some(path) => {
            config.save_to_path(path)?;
            path.to_path_buf()
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    Ok(path)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = resolve_config(Cli::parse())?;
    log::debug!("Resolved config: {config:?}");

    site::copy_static(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "Failed to copy static files to {}",
            config.output_dir.display()
        )
    })?;

    let pages = site::generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.basepath,
    )
    .context("Failed to generate pages")?;

    log::info!(
        "Generated {pages} page(s) into {}",
        config.output_dir.display()
    );
    Ok(())
}
