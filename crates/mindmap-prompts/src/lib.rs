pub mod mind_map;
pub mod subtopics;

use mindmap_core::Pipeline;

/// Assemble the full generation prompt for a pipeline and its input.
pub fn assemble_prompt(pipeline: Pipeline, input: &str) -> String {
    let mut prompt = String::new();
    match pipeline {
        Pipeline::MindMap => mind_map::append_instructions(&mut prompt, input),
        Pipeline::Subtopics => subtopics::append_instructions(&mut prompt, input),
    }
    prompt
}
