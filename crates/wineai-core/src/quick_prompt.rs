//! Preset conversation starters offered next to the chat input.

/// The fixed preset prompts, in display order.
pub const QUICK_PROMPTS: [&str; 3] = [
    "I'm feeling celebratory!",
    "Need a relaxing wine after a long day.",
    "Something adventurous and bold?",
];

/// Looks up a preset by its 1-based slot number.
pub fn quick_prompt(slot: usize) -> Option<&'static str> {
    slot.checked_sub(1)
        .and_then(|index| QUICK_PROMPTS.get(index))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_are_one_based() {
        assert_eq!(quick_prompt(1), Some("I'm feeling celebratory!"));
        assert_eq!(quick_prompt(3), Some("Something adventurous and bold?"));
        assert_eq!(quick_prompt(0), None);
        assert_eq!(quick_prompt(4), None);
    }
}
