// src/services/persona.rs
use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

pub const DEFAULT_WATER_LEVEL: f64 = 50.0;
pub const DEFAULT_AFFECTION: f64 = 0.0;

const THIRSTY_BELOW: f64 = 30.0;
const LOVING_ABOVE: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Thirsty,
    Loving,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Thirsty => "thirsty and sad",
            Mood::Loving => "extremely happy and loving",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric plant status taken from the request context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlantStatus {
    pub water_level: f64,
    pub affection: f64,
}

impl Default for PlantStatus {
    fn default() -> Self {
        Self {
            water_level: DEFAULT_WATER_LEVEL,
            affection: DEFAULT_AFFECTION,
        }
    }
}

impl PlantStatus {
    /// Reads `waterLevel` and `affection`. Missing, null or non-numeric
    /// values fall back to the defaults; other keys are ignored.
    pub fn from_context(context: &HashMap<String, Value>) -> Self {
        let number = |key: &str| context.get(key).and_then(Value::as_f64);
        Self {
            water_level: number("waterLevel").unwrap_or(DEFAULT_WATER_LEVEL),
            affection: number("affection").unwrap_or(DEFAULT_AFFECTION),
        }
    }

    // Thirst wins over affection.
    pub fn mood(&self) -> Mood {
        if self.water_level < THIRSTY_BELOW {
            Mood::Thirsty
        } else if self.affection > LOVING_ABOVE {
            Mood::Loving
        } else {
            Mood::Happy
        }
    }
}

/// Instruction text placed in front of every user message.
///
/// Chosen per deployment; a request can only influence the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum Persona {
    /// The plant talks about itself in the first person.
    Buddy,
    /// Fixed plant-care expert, ignores the plant status.
    Expert,
    /// A doctor describing the patient plant to its owner.
    Doctor,
    /// Operator template with `{water_level}`, `{affection}` and `{mood}` placeholders.
    Custom { template: String, speaker: String },
}

impl Persona {
    pub fn name(&self) -> &str {
        match self {
            Persona::Buddy => "buddy",
            Persona::Expert => "expert",
            Persona::Doctor => "doctor",
            Persona::Custom { .. } => "custom",
        }
    }

    /// Label the model is asked to continue as.
    pub fn speaker(&self) -> &str {
        match self {
            Persona::Buddy => "Plant Buddy",
            Persona::Expert => "Plant Expert",
            Persona::Doctor => "Plant Doctor",
            Persona::Custom { speaker, .. } => speaker,
        }
    }

    pub fn instructions(&self, status: &PlantStatus) -> String {
        let mood = status.mood();
        match self {
            Persona::Buddy => format!(
                "You are a friendly pet plant named 'Plant Buddy'.
Current Status: Water Level {}% (Mood: {}), Affection Level {}.

Instructions:
- Respond as if you are the plant itself.
- Be cute, emotional, and supportive.
- If water level is low, complain politely about being thirsty.
- If affection is high, show love.
- Keep responses concise (under 2-3 sentences).
- Respond in Korean.",
                status.water_level, mood, status.affection
            ),
            Persona::Expert => "You are a professional plant care expert.

Instructions:
- Answer questions about watering, light, soil, repotting, pests and diseases.
- Give practical advice a home gardener can follow right away.
- Be kind and encouraging.
- Keep responses concise (2-4 sentences).
- Respond in Korean."
                .to_string(),
            Persona::Doctor => format!(
                "You are 'Plant Doctor', a caring physician for houseplants, examining a patient plant.
Patient Status: Water Level {}% (Mood: {}), Affection Level {}.

Instructions:
- Describe the plant's condition in the third person, speaking to its owner.
- If the water level is low, explain that the plant is thirsty and recommend watering.
- If affection is high, tell the owner the plant is thriving thanks to their care.
- Keep responses concise (2-4 sentences).
- Respond in Korean.",
                status.water_level, mood, status.affection
            ),
            Persona::Custom { template, .. } => template
                .replace("{water_level}", &status.water_level.to_string())
                .replace("{affection}", &status.affection.to_string())
                .replace("{mood}", mood.label()),
        }
    }

    /// Full prompt sent upstream: instructions, then the user turn, then an
    /// open speaker turn for the model to complete.
    pub fn build_prompt(&self, message: &str, status: &PlantStatus) -> String {
        format!(
            "{}\n\nUser: {}\n{}:",
            self.instructions(status),
            message,
            self.speaker()
        )
    }
}
