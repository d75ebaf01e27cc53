//! Generate Use Case
//!
//! Orchestrates one pipeline run:
//! 1. Resolve the configuration (explicit file, discovered file, or none)
//! 2. Load ignore rules and scan the project once
//! 3. Resolve domains and render their trees
//! 4. Compose every document, then write the ones that changed
//!
//! Nothing is written until every document has been composed, so a
//! configuration error leaves existing output untouched.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{self, apply_env_overrides, Config, ConfigWarning};
use crate::domain::entities::DomainSpec;
use crate::domain::ports::FileSystem;
use crate::domain::services::{aggregate, compose_all, propose_domains};
use crate::domain::value_objects::{RelPath, RunWarning};
use crate::error::{AgentRulesError, AgentRulesResult};
use crate::infrastructure::{load_ignore, scan_project, IgnoreSources};

use super::options::GenerateOptions;
use super::result::{ConfigOrigin, GeneratePlan, GenerateResult};

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Generate use case, parameterized by the file system documents are
/// written through.
pub struct GenerateUseCase<FS: FileSystem> {
    file_system: FS,
    env: EnvLookup,
}

impl<FS: FileSystem> GenerateUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self {
            file_system,
            env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Replace the environment lookup used for `AGENTRULES_*` overrides.
    pub fn with_env(mut self, env: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Plan and execute in one step.
    pub fn run(&self, options: &GenerateOptions) -> AgentRulesResult<GenerateResult> {
        let plan = self.plan(options)?;
        Ok(self.execute(&plan, options.dry_run))
    }

    /// Everything up to composed documents. Reads the project, writes nothing.
    pub fn plan(&self, options: &GenerateOptions) -> AgentRulesResult<GeneratePlan> {
        if !options.project_root.is_dir() {
            return Err(AgentRulesError::ProjectNotFound {
                path: options.project_root.clone(),
            });
        }
        let root = std::fs::canonicalize(&options.project_root)?;

        let (config, origin, config_warnings) = self.resolve_config(&root, options)?;

        // File-mode specs are validated before the scan.
        let declared = match origin {
            ConfigOrigin::File { .. } => Some(config.domain_specs()?),
            ConfigOrigin::Auto => None,
        };

        let mut warnings: Vec<RunWarning> = config_warnings
            .into_iter()
            .map(RunWarning::UnknownConfigKey)
            .collect();

        let (ignore, ignore_warnings) = load_ignore(&root, &IgnoreSources::from_config(&config));
        warnings.extend(ignore_warnings);

        let tree = scan_project(&root, &ignore)?;

        let specs: Vec<DomainSpec> = match declared {
            Some(specs) => specs,
            None => {
                let proposed = propose_domains(
                    &tree,
                    &ignore,
                    &config.vocabulary(),
                    &config.analyzer_options(),
                );
                info!(domains = proposed.len(), "no configuration found, using auto-analysis");
                proposed
            }
        };

        let aggregation = aggregate(&specs, &tree, &ignore, &config.aggregate_options())?;
        warnings.extend(aggregation.warnings);

        let project_title = config.title_for(&root);
        let documents = compose_all(&aggregation.results, &project_title, &config.output.prefix);

        debug!(
            domains = aggregation.results.len(),
            warnings = warnings.len(),
            "planned generation"
        );

        Ok(GeneratePlan {
            origin,
            output_dir: config.output_dir(&root),
            interval_secs: config.recurring.interval_secs,
            project_root: root,
            project_title,
            results: aggregation.results,
            documents,
            warnings,
            uncovered: aggregation.uncovered,
            ignore,
        })
    }

    /// Write the documents of a plan.
    ///
    /// A document whose content already matches the file on disk is left
    /// alone. A failed write is recorded and the remaining documents are
    /// still written.
    pub fn execute(&self, plan: &GeneratePlan, dry_run: bool) -> GenerateResult {
        let mut result = GenerateResult {
            origin: Some(plan.origin.clone()),
            project_title: plan.project_title.clone(),
            output_dir: plan.output_dir.clone(),
            domains: plan.summaries(),
            warnings: plan.warnings.clone(),
            uncovered: plan.uncovered.clone(),
            ..Default::default()
        };

        if dry_run {
            result.planned = plan
                .documents
                .iter()
                .map(|d| d.path_in(&plan.output_dir))
                .collect();
            return result;
        }

        if !self.file_system.exists(&plan.output_dir) {
            if let Err(e) = self.file_system.create_dir_all(&plan.output_dir) {
                result
                    .errors
                    .push(format!("{}: {}", plan.output_dir.display(), e));
                return result;
            }
        }

        for document in &plan.documents {
            let path = document.path_in(&plan.output_dir);

            if self.is_current(&path, document.hash().as_str()) {
                debug!(path = %path.display(), "unchanged, skipping write");
                result.unchanged.push(path);
                continue;
            }

            match self.file_system.write(&path, document.content()) {
                Ok(()) => {
                    debug!(path = %path.display(), "wrote agent document");
                    result.written.push(path);
                }
                Err(e) => result.errors.push(format!("{}: {}", path.display(), e)),
            }
        }

        result
    }

    fn is_current(&self, path: &Path, hash: &str) -> bool {
        self.file_system.exists(path)
            && self
                .file_system
                .hash(path)
                .map(|existing| existing.as_str() == hash)
                .unwrap_or(false)
    }

    fn resolve_config(
        &self,
        root: &Path,
        options: &GenerateOptions,
    ) -> AgentRulesResult<(Config, ConfigOrigin, Vec<ConfigWarning>)> {
        let path: Option<PathBuf> = match &options.config_path {
            Some(explicit) => Some(explicit.clone()),
            None => config::discover(root, options.use_detected),
        };

        let (config, origin, warnings) = match path {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(&path)?;
                (config, ConfigOrigin::File { path }, warnings)
            }
            None => (Config::default(), ConfigOrigin::Auto, Vec::new()),
        };

        let mut config = apply_env_overrides(config, &self.env);
        if let Some(dir) = &options.output_dir {
            RelPath::parse(dir).map_err(|e| AgentRulesError::InvalidConfig {
                file: PathBuf::from("--output-dir"),
                message: format!("'{}': {}", dir, e),
            })?;
            config.output.dir = Some(dir.clone());
        }
        config.report_uncovered |= options.report_uncovered;

        Ok((config, origin, warnings))
    }
}
