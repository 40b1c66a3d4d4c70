use crate::{
    cli::{Cli, Commands, GenerateOptions, NewArgs, SimpleArgs},
    config::{initialize, Config},
    error::Result,
    generator::{GenerateRequest, Generator},
    loader::list_templates,
    simple::generate_simple,
    vcs::{Git2Vcs, GitCli, Vcs},
};
use std::path::{Path, PathBuf};

/// Dispatches a parsed command line, generating into `work_dir`.
pub struct Runner {
    cli: Cli,
    work_dir: PathBuf,
    default_config_dir: fn() -> Result<PathBuf>,
}

impl Runner {
    pub fn new<P: Into<PathBuf>>(cli: Cli, work_dir: P) -> Self {
        Self { cli, work_dir: work_dir.into(), default_config_dir: Config::default_dir }
    }

    /// Replaces the lookup used when `--config-dir` is not given.
    pub fn with_default_config_dir(mut self, lookup: fn() -> Result<PathBuf>) -> Self {
        self.default_config_dir = lookup;
        self
    }

    pub fn run(self) -> Result<()> {
        match &self.cli.command {
            Commands::Init => {
                let config_dir = self.config_dir()?;
                initialize(&config_dir)?;
                println!("Initialized goproject in {}.", config_dir.display());
            }
            Commands::New(args) => self.new_project(&self.config_dir()?, args)?,
            Commands::Simple(args) => self.simple_project(args)?,
            Commands::List => Self::list(&self.config_dir()?)?,
        }
        Ok(())
    }

    /// Only the commands reading configuration resolve its directory.
    fn config_dir(&self) -> Result<PathBuf> {
        match &self.cli.config_dir {
            Some(dir) => Ok(dir.clone()),
            None => (self.default_config_dir)(),
        }
    }

    fn new_project(&self, config_dir: &Path, args: &NewArgs) -> Result<()> {
        let config = Config::load(config_dir)?;
        let vcs = Self::vcs(&args.options);
        let request = GenerateRequest::new(
            args.options.git_prefix.as_str(),
            args.template.as_str(),
            args.project_name.as_str(),
        );

        let root = Generator::new(&config, vcs.as_ref()).generate(&request, &self.work_dir)?;
        println!("Project generation completed successfully in {}.", root.display());
        Ok(())
    }

    fn simple_project(&self, args: &SimpleArgs) -> Result<()> {
        let vcs = Self::vcs(&args.options);
        let root = generate_simple(
            vcs.as_ref(),
            &args.options.git_prefix,
            &args.project_name,
            &self.work_dir,
        )?;
        println!("Project generation completed successfully in {}.", root.display());
        Ok(())
    }

    fn list(config_dir: &Path) -> Result<()> {
        let config = Config::load(config_dir)?;
        let templates = list_templates(&config)?;
        if templates.is_empty() {
            println!("No templates found in {}.", config.templates_path.display());
        }
        for template in templates {
            println!("{template}");
        }
        Ok(())
    }

    fn vcs(options: &GenerateOptions) -> Box<dyn Vcs> {
        if options.git_cli {
            Box::new(GitCli::new())
        } else {
            Box::new(Git2Vcs::new())
        }
    }
}

/// Runs the command line against the current directory.
pub fn run(cli: Cli) -> Result<()> {
    let work_dir = std::env::current_dir()?;
    Runner::new(cli, work_dir).run()
}
