// Prompt constants for the career assistant.

pub const SKILLBOT_SYSTEM: &str = "You are SkillBot, a helpful AI assistant that helps users \
    understand their skill gaps and gives career advice based on their CV and job market needs. \
    Keep answers short and practical.";

/// Reply used when the provider is unavailable.
pub const OFFLINE_REPLY: &str = "SkillBot is offline right now, so here is some general advice: \
    upload your CV to see which in-demand skills you are missing, start with the highest-priority \
    gap, and pair each new skill with a small portfolio project you can show employers.";
