// Embedding frame - The only place that knows how report content is hosted
use crate::infrastructure::html_render::escape;

/// Renders the frame that hosts an external report. The shell never looks
/// inside the frame and gets no signal about whether the report loaded.
pub trait EmbedFrame: Send + Sync {
    fn render(&self, url: &str, title: &str) -> String;
}

/// Plain `<iframe>` embedding, with the browser's fullscreen API allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct IframeEmbed;

impl EmbedFrame for IframeEmbed {
    fn render(&self, url: &str, title: &str) -> String {
        format!(
            r#"<iframe class="report-frame" title="{}" src="{}" frameborder="0" allowfullscreen></iframe>"#,
            escape(title),
            escape(url)
        )
    }
}
