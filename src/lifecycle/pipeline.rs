use super::PipelineError;
use crate::analysis::CatalogAnalysis;
use crate::charts::{render_charts, ChartFormat};
use crate::config::Config;
use crate::export::{read_catalog, write_catalog};
use crate::generator::generate;
use crate::model::Catalog;
use crate::report::ConsoleReport;
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span};

/// The batch orchestrator: generate, aggregate, report, persist, render.
///
/// `Pipeline` is responsible for:
/// - **Validation**: the configuration is checked once, in [`Pipeline::new`], so no stage
///   starts with tables it cannot use
/// - **Ordering**: stages run strictly one after another; each consumes the previous
///   stage's output
/// - **Determinism**: the generation date is injected, so a seed and a date fully
///   determine the CSV bytes
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(Config::default(), today)?;
/// let outcome = pipeline.run(std::io::stdout().lock())?;
/// println!("{}", outcome.csv_path.display());
/// ```
pub struct Pipeline {
    config: Config,
    today: NaiveDate,
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub catalog: Catalog,
    pub analysis: CatalogAnalysis,
    pub csv_path: PathBuf,
    /// Empty when charts are disabled.
    pub charts: Vec<PathBuf>,
}

impl Pipeline {
    /// Validates `config` and fixes the generation date.
    pub fn new(config: Config, today: NaiveDate) -> Result<Self, PipelineError> {
        debug!(?config, "Pipeline configured");
        config.validate()?;
        config.generator.earliest_date(today)?;
        Ok(Self { config, today })
    }

    /// Builds a pipeline that only re-renders persisted tables.
    ///
    /// The generator tables are not validated; [`Pipeline::render`] never draws
    /// rows, and [`Pipeline::generate`] still validates before its first row.
    pub fn renderer(config: Config, today: NaiveDate) -> Self {
        Self { config, today }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every stage, writing the console report to `report_out`.
    ///
    /// The CSV is written only after generation and aggregation succeeded,
    /// and the report only after the CSV is in place. Charts are drawn from
    /// the same in-memory table.
    pub fn run<W: Write>(&self, mut report_out: W) -> Result<RunOutcome, PipelineError> {
        let catalog = self.generate()?;
        let analysis = self.analyze(&catalog);
        let csv_path = self.persist(&catalog)?;

        let report = ConsoleReport::new(&analysis, self.today, self.config.analysis.critical_preview);
        write!(report_out, "{report}").map_err(PipelineError::Report)?;
        report_out.flush().map_err(PipelineError::Report)?;

        let charts = if self.config.output.charts {
            self.render_catalog(&catalog, self.config.output.chart_format)?
        } else {
            info!("Chart rendering disabled");
            Vec::new()
        };

        Ok(RunOutcome {
            catalog,
            analysis,
            csv_path,
            charts,
        })
    }

    pub fn generate(&self) -> Result<Catalog, PipelineError> {
        let _span = info_span!("generate").entered();
        let generator = &self.config.generator;
        Ok(generate(generator, generator.seed, self.today)?)
    }

    pub fn analyze(&self, catalog: &Catalog) -> CatalogAnalysis {
        let _span = info_span!("analyze").entered();
        CatalogAnalysis::from_catalog(catalog, &self.config.analysis)
    }

    /// Writes the table to the configured CSV path.
    pub fn persist(&self, catalog: &Catalog) -> Result<PathBuf, PipelineError> {
        let _span = info_span!("persist").entered();
        let path = self.config.output.csv_path();
        write_catalog(catalog, &path)?;
        Ok(path)
    }

    /// Re-reads a table written by an earlier run and renders its charts.
    pub fn render(&self, input: &Path, format: ChartFormat) -> Result<Vec<PathBuf>, PipelineError> {
        let catalog = {
            let _span = info_span!("load").entered();
            read_catalog(input)?
        };
        self.render_catalog(&catalog, format)
    }

    fn render_catalog(&self, catalog: &Catalog, format: ChartFormat) -> Result<Vec<PathBuf>, PipelineError> {
        Ok(render_charts(catalog, &self.config.output.dir, format)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::model::Category;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    #[test]
    fn test_invalid_config_is_rejected_before_any_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.dir = dir.path().to_path_buf();
        config
            .generator
            .categories
            .retain(|profile| profile.category != Category::Kids);

        let err = Pipeline::new(config, today()).err().unwrap();
        assert!(matches!(
            err,
            PipelineError::Config(ConfigError::MissingCategory(Category::Kids))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_without_charts_writes_report_and_csv() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.dir = dir.path().to_path_buf();
        config.output.charts = false;

        let pipeline = Pipeline::new(config, today()).unwrap();
        let mut report = Vec::new();
        let outcome = pipeline.run(&mut report).unwrap();

        assert_eq!(outcome.catalog.len(), 1520);
        assert!(outcome.charts.is_empty());
        assert!(outcome.csv_path.exists());
        let text = String::from_utf8(report).unwrap();
        assert!(text.contains("Total Products: 1520"));
    }

    #[test]
    fn test_failed_csv_write_prints_no_report() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let mut config = Config::default();
        config.output.dir = blocker;
        config.output.charts = false;

        let mut report = Vec::new();
        let err = Pipeline::new(config, today())
            .unwrap()
            .run(&mut report)
            .unwrap_err();
        assert!(matches!(err, PipelineError::Export(_)));
        assert!(report.is_empty());
    }

    #[test]
    fn test_renderer_ignores_generator_tables() {
        let source = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.dir = source.path().to_path_buf();
        config.output.charts = false;
        let outcome = Pipeline::new(config, today())
            .unwrap()
            .run(std::io::sink())
            .unwrap();

        let target = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.output.dir = target.path().to_path_buf();
        config.generator.fabrics.clear();
        assert!(Pipeline::new(config.clone(), today()).is_err());

        let charts = Pipeline::renderer(config, today())
            .render(&outcome.csv_path, ChartFormat::Svg)
            .unwrap();
        assert_eq!(charts.len(), 6);
    }
}
