use crate::application::dto::{GenerateRequest, GenerateResponse, RunOutcome, WrittenView};
use crate::ports::outbound::{ArtifactWriter, ProgressReporter, TaxonomySource, ViewFormatter};
use crate::shared::shutdown::StopSignal;
use crate::shared::Result;
use crate::taxonomy::domain::{RawWeakness, ViewDefinition, ViewTree, WeaknessCollection};
use crate::taxonomy::services::{RecordExtractor, TreeBuilder};

/// How many unreachable ids are listed in the warning before truncating
const MAX_LISTED_UNREACHABLE: usize = 10;

/// GenerateViewsUseCase - Core use case turning CWE views into tree artifacts
///
/// Views are processed strictly one after another: fetch, extract, build,
/// write. The first failure aborts the whole run. A stop request skips the
/// remaining views and abandons a fetch that is still in flight.
///
/// # Type Parameters
/// * `S` - TaxonomySource implementation
/// * `F` - ViewFormatter implementation
/// * `W` - ArtifactWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateViewsUseCase<S, F, W, PR> {
    source: S,
    formatter: F,
    writer: W,
    progress_reporter: PR,
}

impl<S, F, W, PR> GenerateViewsUseCase<S, F, W, PR>
where
    S: TaxonomySource,
    F: ViewFormatter,
    W: ArtifactWriter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateViewsUseCase with injected dependencies
    pub fn new(source: S, formatter: F, writer: W, progress_reporter: PR) -> Self {
        Self {
            source,
            formatter,
            writer,
            progress_reporter,
        }
    }

    /// Executes the view generation use case
    ///
    /// # Arguments
    /// * `request` - Views to generate
    /// * `stop` - Operator stop signal
    ///
    /// # Returns
    /// The written artifacts and whether the run completed or was stopped
    pub async fn execute(&self, request: GenerateRequest, mut stop: StopSignal) -> Result<GenerateResponse> {
        let total = request.views.len();
        let mut written = Vec::with_capacity(total);

        for (index, view) in request.views.iter().enumerate() {
            if stop.is_triggered() {
                return Ok(self.stop_early(written));
            }
            self.progress_reporter
                .report_progress(index + 1, total, Some(view.title()));

            // Step 1: Fetch raw weaknesses; a stop request abandons the fetch
            let raw_weaknesses = tokio::select! {
                biased;
                _ = stop.triggered() => return Ok(self.stop_early(written)),
                fetched = self.fetch_view(view) => fetched?,
            };

            // Step 2: Normalize into the per-view collection
            let collection = RecordExtractor::extract(raw_weaknesses);

            // Step 3: Build the hierarchy
            let tree = self.build_tree(view, &collection)?;

            // Step 4: Render and write the artifact
            written.push(self.write_view(view, tree)?);
        }

        self.progress_reporter
            .report_completion(&format!("✅ Done: {} view(s) written", written.len()));

        Ok(GenerateResponse::new(RunOutcome::Completed, written))
    }

    async fn fetch_view(&self, view: &ViewDefinition) -> Result<Vec<RawWeakness>> {
        self.progress_reporter.report(&format!(
            "📥 Loading view {} ({}) from {}",
            view.id(),
            view.title(),
            self.source.describe_location(view)
        ));

        let raw_weaknesses = self.source.fetch_weaknesses(view).await?;

        self.progress_reporter.report(&format!(
            "📦 Unzipped {} and parsed {} weakness(es)",
            view.xml_file_name(),
            raw_weaknesses.len()
        ));

        Ok(raw_weaknesses)
    }

    fn build_tree(&self, view: &ViewDefinition, collection: &WeaknessCollection) -> Result<ViewTree> {
        self.progress_reporter
            .report(&format!("🌳 Generating {}", self.formatter.file_name(view)));

        let tree = TreeBuilder::build(collection, view)?;
        self.warn_unreachable(view, &tree);

        Ok(tree)
    }

    fn warn_unreachable(&self, view: &ViewDefinition, tree: &ViewTree) {
        let unreachable = tree.unreachable_ids();
        if unreachable.is_empty() {
            return;
        }

        let mut listed = unreachable
            .iter()
            .take(MAX_LISTED_UNREACHABLE)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if unreachable.len() > MAX_LISTED_UNREACHABLE {
            listed.push_str(", ...");
        }

        self.progress_reporter.report_error(&format!(
            "⚠️  Warning: {} weakness(es) in view {} have no path to a root and were omitted: {}",
            unreachable.len(),
            view.id(),
            listed
        ));
    }

    fn write_view(&self, view: &ViewDefinition, tree: ViewTree) -> Result<WrittenView> {
        let content = self.formatter.format(view, tree.root())?;
        let file_name = self.formatter.file_name(view);
        let path = self.writer.write_artifact(&file_name, &content)?;

        tracing::info!(
            view_id = view.id(),
            nodes = tree.node_count(),
            path = %path.display(),
            "view written"
        );
        self.progress_reporter.report(&format!(
            "💾 Wrote {} ({} node(s))",
            path.display(),
            tree.node_count()
        ));

        Ok(WrittenView {
            view_id: view.id().to_string(),
            path,
            node_count: tree.node_count(),
            unreachable_count: tree.unreachable_ids().len(),
        })
    }

    fn stop_early(&self, written: Vec<WrittenView>) -> GenerateResponse {
        self.progress_reporter.report_error("⏹️  Stopping ...");
        GenerateResponse::new(RunOutcome::Interrupted, written)
    }
}
