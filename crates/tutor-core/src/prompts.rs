//! Prompt templates, one per learning style.
//!
//! [`build_prompt`] is the style dispatcher: it turns a resolved
//! [`LearningStyle`] and a topic into the [`PromptSpec`] for the primary call.

use crate::request::LearningStyle;
use crate::types::PromptSpec;

pub const HELPFUL_ASSISTANT_ROLE: &str = "You are a helpful assistant.";
pub const ANALYTICAL_ROLE: &str = "You are an expert in analytical thinking and logical reasoning.";
pub const APPLICATION_ROLE: &str = "You are a coach specializing in creating hands-on, practical learning experiences for application-based learners.";
pub const CREATIVITY_ROLE: &str =
    "You are a guide specializing in fostering creativity and innovative thinking.";
// Sent without the trailing period.
pub const STORY_ROLE: &str = "You are a helpful assistant";

const VISUAL_MAX_TOKENS: u32 = 800;
const STRUCTURED_MAX_TOKENS: u32 = 700;

pub fn build_prompt(style: LearningStyle, topic: &str) -> PromptSpec {
    match style {
        LearningStyle::Visual | LearningStyle::Default => visual(topic),
        LearningStyle::Analytical => analytical(topic),
        LearningStyle::ApplicationBased => application(topic),
        LearningStyle::CreativityBased => creativity(topic),
        LearningStyle::StoryBased => story(topic),
    }
}

fn visual(topic: &str) -> PromptSpec {
    let prompt = format!(
        "Explain the topic '{topic}' and then subtopics descriptive paragraphs. \
         Start with a brief introduction of the topic. Then break it down into subtopics. \
         Each subtopic should have a bold heading (e.g., **Subtopic Heading**) and a detailed explanation. \
         Make sure that every explanation ends with a complete and coherent sentence."
    );
    PromptSpec::new(HELPFUL_ASSISTANT_ROLE, prompt, VISUAL_MAX_TOKENS)
}

fn analytical(topic: &str) -> PromptSpec {
    let prompt = format!(
        "Explain the topic \"{topic}\" to an analytical skills-based learner.\n\
         The explanation should be structured logically and focus on clarity, problem-solving, and decision-making:\n\
         1. **Problem Identification**: Clearly define the problem or challenge, using questions to break it down.\n\
         2. **Data Collection & Analysis**: Analyze and explain how to gather data and evaluate information.\n\
         3. **Pattern Recognition**: Identify any patterns or connections relevant to the topic.\n\
         4. **Solution Breakdown**: Break down complex aspects of the problem or topic into smaller, manageable parts.\n\
         5. **Decision Making**: Discuss how to make an informed decision based on the analysis.\n\
         6. **Critical Thinking**: Encourage questioning assumptions and thinking critically about the topic.\n\
         7. **Synthesis & Communication**: Summarize the findings and communicate them clearly."
    );
    PromptSpec::new(ANALYTICAL_ROLE, prompt, STRUCTURED_MAX_TOKENS).with_temperature(0.6)
}

fn application(topic: &str) -> PromptSpec {
    let prompt = format!(
        "As an application-based learner, I need you to explain the topic \"{topic}\" in a way that I can immediately apply it to real-world situations.\n\
         Please structure your response as follows:\n\
         1. **Practical Context**: Begin with a real-life scenario or example where this topic is relevant.\n\
         2. **Actionable Steps**: Break down how to use this concept step-by-step in a hands-on way.\n\
         3. **Immediate Application**: Include a specific task or exercise I can do right now to practice or apply this knowledge.\n\
         4. **Reflection**: End with questions or a checklist I can use to assess how well I've understood and implemented the concept."
    );
    PromptSpec::new(APPLICATION_ROLE, prompt, STRUCTURED_MAX_TOKENS).with_temperature(0.7)
}

fn creativity(topic: &str) -> PromptSpec {
    let prompt = format!(
        "Explain the topic \"{topic}\" to a creativity-based learner.\n\
         Please structure your response to stimulate their imagination and encourage innovative thinking:\n\
         1. **Imaginative Scenario**: Start with a vivid, metaphorical story or scenario that sets the stage for the topic.\n\
         2. **Creative Exploration**: Use novel examples, metaphors, or analogies to explain the concept in an unconventional way.\n\
         3. **Interactive Exercise**: Suggest a creative exercise or task to help them explore the topic in a hands-on, inventive way.\n\
         4. **Inspiring Reflection**: Conclude with thought-provoking questions or challenges to spark further creativity."
    );
    PromptSpec::new(CREATIVITY_ROLE, prompt, STRUCTURED_MAX_TOKENS).with_temperature(0.8)
}

fn story(topic: &str) -> PromptSpec {
    let prompt = format!(
        "Explain the topic \"{topic}\" in the form of a story.\n\
         Make it engaging, easy to understand, and include a beginning, middle, and end.\n\
         Use vivid storytelling elements and make it relatable."
    );
    PromptSpec::new(STORY_ROLE, prompt, STRUCTURED_MAX_TOKENS).with_temperature(0.7)
}
