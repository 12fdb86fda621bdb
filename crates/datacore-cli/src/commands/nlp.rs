//! NLP command - print one or all NLP views of a text.

use datacore::{NlpConfig, NlpProcessor};
use serde_json::{json, Value};

use crate::cli::{InputArgs, NlpView};

pub fn run(
    source: InputArgs,
    view: NlpView,
    top_n: usize,
    max_length: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = super::read_text(&source)?;
    let nlp = NlpProcessor::with_config(NlpConfig {
        keyword_limit: top_n,
        summary_max_length: max_length,
    });

    println!("{}", super::render(&render_view(&nlp, &text, &view)?, true)?);
    Ok(())
}

/// The JSON for one view.
pub fn render_view(nlp: &NlpProcessor, text: &str, view: &NlpView) -> serde_json::Result<Value> {
    let limits = nlp.config();
    let value = match view {
        NlpView::All => serde_json::to_value(nlp.analyze(text))?,
        NlpView::Tokens => json!({ "tokens": nlp.tokenize(text) }),
        NlpView::Keywords => {
            json!({ "keywords": nlp.extract_keywords(text, limits.keyword_limit) })
        }
        NlpView::Sentiment => json!({ "sentiment": nlp.sentiment(text) }),
        NlpView::Entities => json!({ "entities": nlp.extract_entities(text) }),
        NlpView::Summary => {
            json!({ "summary": nlp.summarize_text(text, limits.summary_max_length) })
        }
        NlpView::Language => json!({ "language": nlp.detect_language(text) }),
    };
    Ok(value)
}
