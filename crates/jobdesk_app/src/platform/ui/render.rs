use jobdesk_core::{ActiveJobView, AppViewModel, BookmarkRowView, JobRowView, SearchStatus};

/// Text screen for one view model.
pub fn render(view: &AppViewModel, show_bookmarks: bool, notice: Option<&str>) -> Vec<String> {
    let mut lines = vec![status_line(view)];

    if let Some(error) = &view.error {
        lines.push(format!("  ! {error} (:retry to try again)"));
    }

    if view.rows.is_empty() && view.status == SearchStatus::Ready {
        lines.push("  (no results)".to_string());
    }
    lines.extend(view.rows.iter().map(format_job_row));

    if let Some(active) = &view.active {
        lines.extend(format_active(active));
    }

    if show_bookmarks {
        lines.push(format!("Bookmarks ({})", view.bookmarks.len()));
        lines.extend(view.bookmarks.iter().map(format_bookmark_row));
    }

    lines.push(format!("  ?{}", view.params));
    if let Some(notice) = notice {
        lines.push(format!("  > {notice}"));
    }
    lines
}

fn status_line(view: &AppViewModel) -> String {
    let status = match view.status {
        SearchStatus::Idle => "Type to search",
        SearchStatus::Loading => "Loading...",
        SearchStatus::Ready => "Ready",
        SearchStatus::Failed => "Failed",
    };
    format!(
        "[{status}] \"{search}\" | {count} results | sort: {sort} | page {page}/{pages}",
        search = view.search_text,
        count = view.result_count,
        sort = view.sort_key.as_str(),
        page = view.page_number,
        pages = view.total_pages,
    )
}

fn format_job_row(row: &JobRowView) -> String {
    format!(
        "{marker} [{badge:>2}] #{id} {title} | {company} | {days}d{star}",
        marker = if row.active { ">" } else { " " },
        badge = row.badge_letters,
        id = row.id,
        title = row.title,
        company = row.company,
        days = row.days_ago,
        star = if row.bookmarked { " *" } else { "" },
    )
}

fn format_active(active: &ActiveJobView) -> Vec<String> {
    let mut lines = Vec::new();
    let star = if active.bookmarked { " *" } else { "" };
    match (&active.detail, &active.item) {
        (Some(detail), _) => {
            lines.push(format!(
                "== #{} {} at {}{star}",
                active.id, detail.item.title, detail.item.company
            ));
            lines.push(format!(
                "   {} | {} | {}",
                detail.duration, detail.salary, detail.location
            ));
            lines.push(format!("   {}", detail.description));
            if !detail.qualifications.is_empty() {
                lines.push(format!("   Qualifications: {}", detail.qualifications.join(", ")));
            }
            if !detail.reviews.is_empty() {
                lines.push(format!("   Reviews: {}", detail.reviews.join(" / ")));
            }
        }
        (None, Some(item)) => {
            lines.push(format!("== #{} {} at {}{star}", active.id, item.title, item.company));
        }
        (None, None) => lines.push(format!("== #{}{star}", active.id)),
    }
    if active.is_loading {
        lines.push("   Loading details...".to_string());
    }
    if let Some(error) = &active.error {
        lines.push(format!("   ! {error}"));
    }
    lines
}

fn format_bookmark_row(row: &BookmarkRowView) -> String {
    match (&row.title, &row.company) {
        (Some(title), Some(company)) => format!("  * #{} {title} | {company}", row.id),
        _ if row.is_loading => format!("  * #{} (loading...)", row.id),
        _ => format!("  * #{}", row.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdesk_core::SortKey;

    fn row(id: u64, bookmarked: bool, active: bool) -> JobRowView {
        JobRowView {
            id,
            title: "Rust Dev".into(),
            company: "Crab Co".into(),
            badge_letters: "RD".into(),
            days_ago: 3,
            bookmarked,
            active,
        }
    }

    #[test]
    fn rows_show_bookmark_and_active_markers() {
        assert_eq!(
            format_job_row(&row(4, true, true)),
            "> [RD] #4 Rust Dev | Crab Co | 3d *"
        );
        assert_eq!(
            format_job_row(&row(5, false, false)),
            "  [RD] #5 Rust Dev | Crab Co | 3d"
        );
    }

    #[test]
    fn screen_includes_status_error_and_params() {
        let view = AppViewModel {
            search_text: "rust".into(),
            status: SearchStatus::Failed,
            error: Some("http status 503".into()),
            sort_key: SortKey::Recent,
            page_number: 1,
            total_pages: 1,
            params: "search=rust&sort=recent&page=1".into(),
            ..AppViewModel::default()
        };
        let lines = render(&view, false, Some("saved"));
        assert_eq!(
            lines[0],
            "[Failed] \"rust\" | 0 results | sort: recent | page 1/1"
        );
        assert!(lines[1].contains("http status 503"));
        assert_eq!(lines[lines.len() - 2], "  ?search=rust&sort=recent&page=1");
        assert_eq!(lines[lines.len() - 1], "  > saved");
    }
}
