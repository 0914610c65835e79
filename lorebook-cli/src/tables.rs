//! Plain fixed-width table rendering over already-fetched records.

use lorebook_catalog::types::{Ability, Champion, Region};

/// Right-pad (or keep) a value to the given column width.
fn pad(input: &str, width: usize) -> String {
    if input.chars().count() >= width {
        return input.to_string();
    }
    let mut padded = input.to_string();
    while padded.chars().count() < width {
        padded.push(' ');
    }
    padded
}

/// Truncate long text so a cell stays readable.
fn clip(input: &str, width: usize) -> String {
    if input.chars().count() <= width {
        return input.to_string();
    }
    let cut: String = input.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}

pub(crate) fn champion_table(champions: &[Champion]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "| {} | {} | {} | {} | {} |\n",
        pad("ID", 4),
        pad("Name", 20),
        pad("Nickname", 28),
        pad("Role", 14),
        pad("Difficulty", 12),
    ));
    out.push_str(&format!(
        "|{}|{}|{}|{}|{}|\n",
        "-".repeat(6),
        "-".repeat(22),
        "-".repeat(30),
        "-".repeat(16),
        "-".repeat(14),
    ));
    for c in champions {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            pad(&c.id.to_string(), 4),
            pad(&clip(&c.name, 20), 20),
            pad(&clip(&c.nickname, 28), 28),
            pad(&clip(&c.role, 14), 14),
            pad(&clip(&c.difficulty, 12), 12),
        ));
    }
    out
}

pub(crate) fn champion_detail(c: &Champion) -> String {
    let mut out = String::new();
    out.push_str(&format!("ID:               {}\n", c.id));
    out.push_str(&format!("Name:             {}\n", c.name));
    out.push_str(&format!("Nickname:         {}\n", c.nickname));
    out.push_str(&format!("Related:          {}\n", c.related_champions));
    out.push_str(&format!("Cinematics:       {}\n", c.cinematic));
    out.push_str(&format!("Short stories:    {}\n", c.short_stories));
    out.push_str(&format!("Role:             {}\n", c.role));
    out.push_str(&format!("Race:             {}\n", c.race));
    out.push_str(&format!("Aspects:          {}\n", c.aspects));
    out.push_str(&format!("Difficulty:       {}\n", c.difficulty));
    out.push_str(&format!("Biography:        {}\n", clip(&c.biography, 120)));
    out
}

/// Render regions; `members` holds the champion names per region, in the
/// same order as `regions`.
pub(crate) fn region_table(regions: &[Region], members: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "| {} | {} | {} | {} | Champions\n",
        pad("ID", 4),
        pad("Name", 18),
        pad("Description", 40),
        pad("Stories", 7),
    ));
    for (region, names) in regions.iter().zip(members) {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {}\n",
            pad(&region.id.to_string(), 4),
            pad(&clip(&region.name, 18), 18),
            pad(&clip(&region.description, 40), 40),
            pad(&region.story_count.to_string(), 7),
            names.join(", "),
        ));
    }
    out
}

pub(crate) fn ability_table(abilities: &[Ability]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "| {} | {} | {} | {} | {} | {} |\n",
        pad("Name", 24),
        pad("Passive", 7),
        pad("Key", 3),
        pad("Description", 40),
        pad("Link", 24),
        pad("Champion", 8),
    ));
    for a in abilities {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            pad(&clip(&a.name, 24), 24),
            pad(if a.passive { "yes" } else { "no" }, 7),
            pad(&a.hotkey.to_string(), 3),
            pad(&clip(&a.description, 40), 40),
            pad(&clip(&a.link, 24), 24),
            pad(&a.champion_id.to_string(), 8),
        ));
    }
    out
}
