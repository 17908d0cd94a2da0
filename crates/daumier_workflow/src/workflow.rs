//! The composite news-to-meme workflow.

use daumier_clients::{parse_caption, GeminiClient, NewsClient, RenderClient, TemplateClient};
use daumier_core::{
    CaptionDraft, Credentials, MemeResult, NewsArticle, NewsMeme, TemplateRef, WorkflowRequest,
};
use daumier_error::{
    CaptionError, NewsError, RenderError, TemplateError, WorkflowError, WorkflowErrorKind,
};
use tracing::{debug, info, instrument};

/// Composes the upstream clients into the end-to-end operation.
///
/// Steps run strictly sequentially; no step begins before the prior
/// completes, nothing is retried, and there is no partial-result return:
/// the workflow either fully succeeds or fully fails. Inner-step failures
/// are wrapped with the workflow prefix, preserving the inner message.
///
/// The workflow holds no state across invocations; concurrent invocations
/// share nothing but the underlying connection pools.
pub struct NewsMemeWorkflow {
    news: NewsClient,
    templates: TemplateClient,
    gemini: GeminiClient,
    render: RenderClient,
}

impl std::fmt::Debug for NewsMemeWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsMemeWorkflow").finish_non_exhaustive()
    }
}

impl NewsMemeWorkflow {
    /// Creates a workflow wired to the production upstream services.
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            news: NewsClient::new(credentials),
            templates: TemplateClient::new(),
            gemini: GeminiClient::new(credentials),
            render: RenderClient::new(credentials),
        }
    }

    /// Creates a workflow from explicitly constructed clients, for tests.
    pub fn with_clients(
        news: NewsClient,
        templates: TemplateClient,
        gemini: GeminiClient,
        render: RenderClient,
    ) -> Self {
        Self {
            news,
            templates,
            gemini,
            render,
        }
    }

    /// Fetches up to 10 articles for the topic (blank topic means general
    /// regional news).
    pub async fn fetch_news(&self, topic: Option<&str>) -> Result<Vec<NewsArticle>, NewsError> {
        self.news.fetch(topic.unwrap_or_default()).await
    }

    /// Fetches up to 100 meme templates in upstream order.
    pub async fn fetch_templates(&self) -> Result<Vec<TemplateRef>, TemplateError> {
        self.templates.fetch().await
    }

    /// Generates and validates a caption for the given article text.
    ///
    /// Returns `Ok(None)` when the model produced nothing parseable; the
    /// caller decides whether that is fatal.
    pub async fn generate_caption(
        &self,
        title: &str,
        description: &str,
        template_ids: &[u64],
    ) -> Result<Option<CaptionDraft>, CaptionError> {
        let raw = self.gemini.generate(title, description, template_ids).await?;
        Ok(raw.as_deref().and_then(parse_caption))
    }

    /// Renders a meme from a template id and the two caption texts.
    pub async fn render_meme(
        &self,
        template_id: u64,
        top_text: &str,
        bottom_text: &str,
    ) -> Result<MemeResult, RenderError> {
        self.render.render(template_id, top_text, bottom_text).await
    }

    /// Runs the full fetch → select → caption → render sequence.
    #[instrument(skip(self), fields(topic = ?request.topic, index = request.index()))]
    pub async fn run(&self, request: &WorkflowRequest) -> Result<NewsMeme, WorkflowError> {
        let articles = self
            .fetch_news(request.topic.as_deref())
            .await
            .map_err(|e| wrap(e.kind))?;
        if articles.is_empty() {
            return Err(WorkflowError::new(WorkflowErrorKind::NoArticles));
        }

        // An out-of-range index and an article without usable text are the
        // same failure from the caller's point of view.
        let article = articles
            .get(request.index())
            .filter(|article| article.is_captionable())
            .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::UnusableArticle))?;
        let title = article.title.clone().unwrap_or_default();
        let description = article.description.clone().unwrap_or_default();
        debug!(title = %title, "Article selected");

        let templates = self.fetch_templates().await.map_err(|e| wrap(e.kind))?;
        let template_ids: Vec<u64> = templates.iter().map(|t| t.id).collect();

        let caption = self
            .generate_caption(&title, &description, &template_ids)
            .await
            .map_err(|e| wrap(e.kind))?
            .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::NoCaption))?;
        debug!(template_id = caption.template_id, "Caption generated");

        let meme = self.render_meme(caption.template_id, &caption.top_text, &caption.bottom_text)
            .await
            .map_err(|e| wrap(e.kind))?;
        info!(url = ?meme.url, "News meme rendered");

        Ok(NewsMeme {
            article_title: title,
            article_description: description,
            caption,
            url: meme.url,
        })
    }
}

/// Wraps an inner-step failure kind with the workflow prefix.
///
/// Takes the bare kind, not the located wrapper: callers see the inner
/// message only, source locations stay in the log.
#[track_caller]
fn wrap(kind: impl std::fmt::Display) -> WorkflowError {
    WorkflowError::new(WorkflowErrorKind::Failed(kind.to_string()))
}
