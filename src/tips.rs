//! Fixed advice on reducing the footprint of AI usage

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        title: "Choose lightweight models",
        body: "Use GPT-3.5, Mistral or a small Claude model for simple tasks.",
    },
    Tip {
        title: "Send fewer requests",
        body: "Group your questions together instead of querying the AI several times.",
    },
    Tip {
        title: "Generate fewer images",
        body: "Prefer text answers over visuals from Midjourney or DALL·E.",
    },
    Tip {
        title: "Avoid unnecessary requests",
        body: "Reread and consolidate your prompt before sending it.",
    },
    Tip {
        title: "Run eco-friendly local models",
        body: "For some tasks, a local model such as Mistral is enough.",
    },
    Tip {
        title: "Think about water",
        body: "Training and running AI also consumes water, often invisible but very real.",
    },
    Tip {
        title: "Use AI deliberately",
        body: "AI is powerful, but every prompt has a cost for the planet.",
    },
];
