//! Prompt template rendering.
//!
//! Turns the dialogue snapshot into engine-ready prompt text. The engine
//! consumes raw text, so the chat-markup conventions of the target model
//! live here, behind the `PromptTemplate` trait.

use confab_types::chat::{Role, Turn};

/// Renders an ordered turn snapshot into prompt text.
pub trait PromptTemplate: Send + Sync {
    /// Render the snapshot, ending with the markup that cues the engine to
    /// produce the next assistant turn.
    fn render(&self, turns: &[Turn]) -> String;

    /// Stop sequences the engine should honor for this markup.
    fn stop_sequences(&self) -> Vec<String>;
}

/// Zephyr-style chat markup, as used by TinyLlama-1.1B-Chat.
///
/// Layout per turn:
/// ```text
/// <|user|>
/// {content}</s>
/// <|assistant|>
/// {content}</s>
/// ```
/// followed by a trailing `<|assistant|>\n` generation prompt.
#[derive(Debug, Clone, Default)]
pub struct ZephyrTemplate;

impl ZephyrTemplate {
    const USER_TAG: &'static str = "<|user|>";
    const ASSISTANT_TAG: &'static str = "<|assistant|>";
    const EOS: &'static str = "</s>";
}

impl PromptTemplate for ZephyrTemplate {
    fn render(&self, turns: &[Turn]) -> String {
        let mut prompt = String::new();
        for turn in turns {
            let tag = match turn.role {
                Role::User => Self::USER_TAG,
                Role::Assistant => Self::ASSISTANT_TAG,
            };
            prompt.push_str(tag);
            prompt.push('\n');
            prompt.push_str(&turn.content);
            prompt.push_str(Self::EOS);
            prompt.push('\n');
        }
        // Generation prompt: cue the engine to speak as the assistant.
        prompt.push_str(Self::ASSISTANT_TAG);
        prompt.push('\n');
        prompt
    }

    fn stop_sequences(&self) -> Vec<String> {
        vec![Self::EOS.to_string(), Self::USER_TAG.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confab_types::chat::Turn;

    #[test]
    fn test_render_single_user_turn() {
        let turns = vec![Turn::new("user", "hi")];
        let prompt = ZephyrTemplate.render(&turns);
        assert_eq!(prompt, "<|user|>\nhi</s>\n<|assistant|>\n");
    }

    #[test]
    fn test_render_full_exchange() {
        let turns = vec![
            Turn::new("user", "hi"),
            Turn::new("bot", "hello"),
            Turn::new("user", "bye"),
        ];
        let prompt = ZephyrTemplate.render(&turns);
        assert_eq!(
            prompt,
            "<|user|>\nhi</s>\n<|assistant|>\nhello</s>\n<|user|>\nbye</s>\n<|assistant|>\n"
        );
    }

    #[test]
    fn test_render_empty_snapshot_is_just_generation_prompt() {
        let prompt = ZephyrTemplate.render(&[]);
        assert_eq!(prompt, "<|assistant|>\n");
    }

    #[test]
    fn test_stop_sequences() {
        let stops = ZephyrTemplate.stop_sequences();
        assert!(stops.contains(&"</s>".to_string()));
        assert!(stops.contains(&"<|user|>".to_string()));
    }
}
