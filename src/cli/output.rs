//! Table and detail formatting for CLI commands using comfy-table.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::Post;

/// Format a list of posts as a table.
pub fn format_posts(posts: &[Post]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").add_attribute(Attribute::Bold),
        Cell::new("User").add_attribute(Attribute::Bold),
        Cell::new("Title").add_attribute(Attribute::Bold),
    ]);

    for post in posts {
        table.add_row(vec![
            Cell::new(post.id),
            Cell::new(post.user_id),
            Cell::new(truncate_text(&post.title, 60)),
        ]);
    }

    table.to_string()
}

/// Format a single post with its body.
pub fn format_post(post: &Post) -> String {
    format!(
        "#{} (user {})\n{}\n\n{}",
        post.id, post.user_id, post.title, post.body
    )
}

/// Truncate text to a maximum length, appending an ellipsis.
fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}
