use ai_impact::tips::TIPS;
use colored::Colorize;

/// Execute the tips command
pub fn execute() {
    println!("{}", "Tips to reduce your AI footprint".green().bold());
    println!();
    for (idx, tip) in TIPS.iter().enumerate() {
        println!("  {}. {}", idx + 1, tip.title.bold());
        println!("     {}", tip.body);
    }
}
