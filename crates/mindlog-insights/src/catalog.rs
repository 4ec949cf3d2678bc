//! The fixed coping-strategy catalog. Read-only at runtime; effectiveness
//! scores are author-assigned.

use std::sync::LazyLock;

use mindlog_core::models::strategy::{CopingStrategy, StrategyCategory};

static CATALOG: LazyLock<Vec<CopingStrategy>> = LazyLock::new(|| {
    vec![
        strategy(
            "behavioral_activation",
            "Behavioral Activation",
            "Combat depression by scheduling and engaging in meaningful activities.",
            StrategyCategory::Depression,
            15,
            9,
            "1. Make a list of activities you used to enjoy\n\
             2. Choose ONE small activity for today\n\
             3. Schedule a specific time (be realistic)\n\
             4. Do it even if you don't feel like it\n\
             5. Notice how you feel afterward\n\n\
             Examples: 10-minute walk, call a friend, listen to music, cook a simple meal",
        ),
        strategy(
            "thought_record",
            "Thought Record (CBT)",
            "Identify and challenge negative automatic thoughts that maintain depression.",
            StrategyCategory::Depression,
            10,
            9,
            "When you notice a negative mood:\n\
             1. Write down the situation\n\
             2. What thought went through your mind?\n\
             3. How much do you believe it? (0-100%)\n\
             4. What evidence supports this thought?\n\
             5. What evidence contradicts it?\n\
             6. What's a more balanced thought?\n\
             7. Re-rate your belief in the original thought",
        ),
        strategy(
            "progressive_muscle_relaxation",
            "Progressive Muscle Relaxation",
            "Systematically tense and relax muscle groups to reduce physical anxiety.",
            StrategyCategory::Anxiety,
            10,
            8,
            "Find a quiet space. For each muscle group:\n\
             1. Tense for 5 seconds\n\
             2. Release and notice the difference\n\
             3. Rest for 10 seconds\n\n\
             Sequence: hands, arms, shoulders, face, chest, stomach, legs, feet",
        ),
        strategy(
            "worry_time",
            "Scheduled Worry Time",
            "Contain worry by scheduling a specific time to address concerns.",
            StrategyCategory::Anxiety,
            15,
            7,
            "1. Set aside 15 minutes daily for worrying\n\
             2. When worry comes up during the day, note it and postpone\n\
             3. During worry time, write down all concerns\n\
             4. For each worry ask: is this in my control? What can I do about it?\n\
             5. Create action steps for controllable worries\n\
             6. Practice accepting uncontrollable ones\n\
             7. Stop when the timer ends",
        ),
        strategy(
            "time_management",
            "Priority Matrix (Eisenhower Box)",
            "Organize tasks by urgency and importance to reduce stress.",
            StrategyCategory::Stress,
            10,
            8,
            "Draw a 2x2 grid:\n\
             Urgent & Important: do first\n\
             Not Urgent & Important: schedule\n\
             Urgent & Not Important: delegate\n\
             Not Urgent & Not Important: eliminate\n\n\
             1. List all your tasks\n\
             2. Place each in a quadrant\n\
             3. Focus only on the first quadrant today\n\
             4. Schedule the second quadrant\n\
             5. Say no to the rest",
        ),
        strategy(
            "box_breathing",
            "Box Breathing (4-4-4-4)",
            "A paced breathing technique for rapid stress reduction and focus.",
            StrategyCategory::Stress,
            5,
            9,
            "Visualize a square:\n\
             1. Breathe IN for 4 counts\n\
             2. HOLD for 4 counts\n\
             3. Breathe OUT for 4 counts\n\
             4. HOLD for 4 counts\n\
             5. Repeat at least 4 rounds\n\n\
             Sit up straight, breathe through your nose and focus only on counting.",
        ),
        strategy(
            "values_clarification",
            "Personal Values Exercise",
            "Connect with your core values to guide decisions and increase meaning.",
            StrategyCategory::Personality,
            15,
            8,
            "1. Review a list of values: family, health, career, creativity, growth, \
             freedom, service, adventure, stability, relationships, knowledge, nature\n\
             2. Choose your top 5 values\n\
             3. Rank them 1-5\n\
             4. For each, ask whether you're living according to it and what one \
             action would align you better\n\
             5. Commit to ONE action this week",
        ),
        strategy(
            "grounding_54321",
            "5-4-3-2-1 Grounding",
            "Mindfulness technique to anchor yourself in the present moment.",
            StrategyCategory::Mindfulness,
            5,
            8,
            "Look around and identify:\n\
             5 things you can SEE\n\
             4 things you can TOUCH\n\
             3 things you can HEAR\n\
             2 things you can SMELL\n\
             1 thing you can TASTE\n\n\
             Take slow, deep breaths between each step.",
        ),
        strategy(
            "breathing_478",
            "4-7-8 Breathing",
            "A short breathing pattern that calms the nervous system within minutes.",
            StrategyCategory::QuickRelief,
            3,
            8,
            "1. Exhale completely through your mouth\n\
             2. Inhale quietly through your nose for 4 counts\n\
             3. Hold your breath for 7 counts\n\
             4. Exhale through your mouth for 8 counts\n\
             5. Repeat 4 times",
        ),
        strategy(
            "cold_water_reset",
            "Cold Water Reset",
            "Use cold water on your face or wrists to interrupt intense emotion.",
            StrategyCategory::QuickRelief,
            2,
            7,
            "1. Run cold water over your wrists for 30 seconds, or splash your face\n\
             2. Breathe slowly while you do it\n\
             3. Notice the change in your body\n\
             4. Name one thing you'll do next",
        ),
        strategy(
            "gratitude_practice",
            "Gratitude Reflection",
            "Focus on positive aspects of your life to enhance wellbeing.",
            StrategyCategory::General,
            5,
            7,
            "Write down 3 things you're grateful for today:\n\
             Be specific about why you're grateful\n\
             Include small and big things\n\
             Notice how this makes you feel",
        ),
        strategy(
            "gratitude_three_good_things",
            "Three Good Things",
            "Research-backed practice to train attention toward what goes well.",
            StrategyCategory::PositivePsychology,
            5,
            8,
            "Before bed, write down:\n\
             1. Three things that went well today (they can be tiny)\n\
             2. For each, why it happened: your actions, others' actions, circumstances\n\
             3. Notice how you feel\n\n\
             Do this daily for 2 weeks for best results.",
        ),
    ]
});

fn strategy(
    id: &str,
    name: &str,
    description: &str,
    category: StrategyCategory,
    duration_minutes: u32,
    effectiveness_score: u8,
    instructions: &str,
) -> CopingStrategy {
    CopingStrategy {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        duration_minutes,
        effectiveness_score,
        instructions: instructions.to_string(),
    }
}

/// All catalog entries in catalog order.
pub fn all_strategies() -> &'static [CopingStrategy] {
    &CATALOG
}

pub fn get_strategy(id: &str) -> Option<&'static CopingStrategy> {
    CATALOG.iter().find(|s| s.id == id)
}

/// Position in the catalog, used as the final tie-break when ranking.
pub fn catalog_position(id: &str) -> Option<usize> {
    CATALOG.iter().position(|s| s.id == id)
}

/// The `n` most effective strategies of a category. Ties keep catalog order.
pub fn top_in_category(category: StrategyCategory, n: usize) -> Vec<&'static CopingStrategy> {
    let mut matching: Vec<&CopingStrategy> =
        CATALOG.iter().filter(|s| s.category == category).collect();
    matching.sort_by(|a, b| b.effectiveness_score.cmp(&a.effectiveness_score));
    matching.truncate(n);
    matching
}
