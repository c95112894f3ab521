//! "Colony Collapse" - the story served by default.
//!
//! A crewmember on a failing station chooses between repairs and answering
//! an alien signal. Several nodes route back to earlier ones.
//!
//! Known content gap: `decline_help` (and `end_neutral` behind it) is
//! declared but no choice leads there. The alien encounter's "decline"
//! choice goes to `repair_core` instead. Left as authored until the
//! intended branch is confirmed.

use storyweb_domain::{DomainError, StoryGraph, StoryNode};

/// Build the colony story graph.
pub fn colony_story() -> Result<StoryGraph, DomainError> {
    StoryGraph::builder()
        .node(
            "start",
            StoryNode::new(
                "Welcome to the colony, crewmember. The power systems have failed, and the station is on the verge of collapse. You have to make decisions that will determine your fate.",
            )
            .with_choice("Inspect the power core.", "core")
            .with_choice("Repair the communication array.", "array")
            .with_choice("Investigate the mysterious signals.", "signals"),
        )
        .node(
            "core",
            StoryNode::new(
                "You approach the power core. Sparks are flying, and it’s a dangerous place. Do you attempt to fix it?",
            )
            .with_choice("Try to repair it.", "repair_core")
            .with_choice("Leave it and check the communication array.", "array"),
        )
        .node(
            "array",
            StoryNode::new(
                "You head to the communication array. It’s barely functioning, but you think you can fix it. What will you do?",
            )
            .with_choice("Try to repair the array.", "repair_array")
            .with_choice("Check the mysterious signals instead.", "signals"),
        )
        .node(
            "signals",
            StoryNode::new(
                "You decode the signals and discover they might be coming from an alien ship. What do you do?",
            )
            .with_choice("Try to communicate with them.", "alien_communication")
            .with_choice("Ignore the signals and focus on repairs.", "core"),
        )
        .node(
            "repair_core",
            StoryNode::new(
                "You carefully attempt to repair the power core. After a tense few moments, you manage to stabilize it, restoring power to critical systems. The station is saved—for now. What’s your next move?",
            )
            .with_choice("Check the communication array.", "array")
            .with_choice("Investigate the mysterious signals.", "signals"),
        )
        .node(
            "repair_array",
            StoryNode::new(
                "You repair the communication array, restoring full functionality. You manage to send a distress signal to the nearest space station, hoping for rescue. The crisis is over, but you're still stranded. What now?",
            )
            .with_choice("Check the power core.", "core")
            .with_choice("Investigate the mysterious signals.", "signals"),
        )
        .node(
            "alien_communication",
            StoryNode::new(
                "You initiate communication with the alien ship. They respond, but their message is cryptic and seems to indicate they are aware of the station's collapse. Suddenly, a small alien vessel docks with the station. Do you approach it?",
            )
            .with_choice("Approach the alien vessel.", "alien_encounter")
            .with_choice("Ignore the alien vessel and focus on repairs.", "repair_array"),
        )
        .node(
            "alien_encounter",
            StoryNode::new(
                "You approach the alien vessel cautiously. The door opens, and a humanoid alien steps out, offering a device that could help repair the station permanently. However, it comes with a mysterious warning about future consequences. Do you accept their help?",
            )
            .with_choice("Accept the alien's help.", "accept_help")
            .with_choice("Decline and try to fix it yourself.", "repair_core"),
        )
        .node(
            "accept_help",
            StoryNode::new(
                "The alien provides a powerful energy source, and with it, you manage to repair the station's core. The alien ship departs, leaving you with a sense of both relief and unease. The station is saved, but what will the future hold? You wonder if this alien encounter will have consequences down the line.",
            )
            .with_choice("Live to fight another day.", "end_good"),
        )
        .node(
            "decline_help",
            StoryNode::new(
                "You decline the alien's offer and decide to fix the station yourself. It takes several tense hours, but you manage to restore power and communication systems. The crisis is over, but you remain uneasy about the missed opportunity.",
            )
            .with_choice("Live to fight another day.", "end_neutral"),
        )
        .node(
            "end_good",
            StoryNode::new(
                "With the station repaired and a future uncertain, you breathe a sigh of relief. The rescue ship arrives, and you're saved. Your decision to trust the alien might have saved the colony in ways you’ll never fully understand. You’re safe, but your journey is far from over.",
            )
            .with_choice("End the story.", "end"),
        )
        .node(
            "end_neutral",
            StoryNode::new(
                "The station is back online, and you survive. The distress signal has gone out, but you can’t shake the feeling that there might have been a better way to handle things. Perhaps the mysterious alien race will be watching you in the future.",
            )
            .with_choice("End the story.", "end"),
        )
        .node(
            "end",
            StoryNode::new(
                "The adventure ends here. Will you ever be called back to adventure? Who knows. But for now, you can rest knowing you survived the collapse of the colony. Until next time.",
            ),
        )
        .build()
}
