use crate::pipeline::Pipeline;

/// Cut the candidate JSON value out of free-form model text.
///
/// Spans from the first opening delimiter to the last closing delimiter of
/// the pipeline's kind, inclusive. This is a greedy span, not a balanced
/// match: two objects separated by prose come back as one (unparseable)
/// candidate. Text without an ordered delimiter pair is returned unchanged.
pub fn extract_candidate(text: &str, pipeline: Pipeline) -> &str {
    let Some(start) = text.find(pipeline.open_delimiter()) else {
        return text;
    };
    let Some(end) = text.rfind(pipeline.close_delimiter()) else {
        return text;
    };
    if end < start {
        return text;
    }
    // Both delimiters are single-byte ASCII, so `end + 1` is a char boundary.
    &text[start..=end]
}
