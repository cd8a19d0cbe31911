use rasp_core::types::{Course, Group, Institute, Roster};
use rasp_core::{RaspError, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::fetch::PageFetcher;

fn parse_err(element: &str) -> RaspError {
    RaspError::Parse {
        page: "groups page".to_string(),
        element: element.to_string(),
    }
}

fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Fetch the groups listing page and parse it into a roster snapshot.
pub async fn scrape_roster(fetcher: &PageFetcher) -> Result<Roster> {
    let html = fetcher.fetch(fetcher.groups_url()).await?;
    parse_roster(&html)
}

/// Parse the groups listing page.
///
/// Institutes are the `.inst_name` headings in document order; each one's
/// parsing context is the element right after it. Within that context the
/// first table row's `th` cells name the courses and the second row's `td`
/// cells hold the group links, aligned by column. Institute and course ids
/// are positional and only meaningful within this one snapshot; group ids are
/// the suffix-stripped link targets and stay opaque.
pub fn parse_roster(html: &str) -> Result<Roster> {
    let document = Html::parse_document(html);
    let inst_sel = Selector::parse(".inst_name").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let th_sel = Selector::parse("th").unwrap();
    let td_sel = Selector::parse("td").unwrap();
    let a_sel = Selector::parse("a").unwrap();

    let mut roster = Roster::default();

    for (inst_index, inst) in document.select(&inst_sel).enumerate() {
        let inst_id = inst_index as u32;
        roster.institutes.push(Institute {
            id: inst_id,
            name: text_of(inst),
        });

        let container = inst
            .next_siblings()
            .find_map(ElementRef::wrap)
            .ok_or_else(|| parse_err("course table after .inst_name"))?;

        let rows: Vec<ElementRef> = container.select(&tr_sel).collect();
        let header = rows.first().ok_or_else(|| parse_err("course header row"))?;
        let data = rows.get(1).ok_or_else(|| parse_err("group row"))?;

        let group_cells: Vec<ElementRef> = data.select(&td_sel).collect();

        for (course_index, heading) in header.select(&th_sel).enumerate() {
            let course_id = inst_id * 1000 + course_index as u32;
            roster.courses.push(Course {
                id: course_id,
                name: text_of(heading),
                inst_id,
            });

            // A header column without a matching data cell means the page
            // layout diverged; fail rather than truncate.
            let cell = group_cells
                .get(course_index)
                .ok_or_else(|| parse_err("group cell for course column"))?;

            for link in cell.select(&a_sel) {
                let href = link
                    .value()
                    .attr("href")
                    .ok_or_else(|| parse_err("href on group link"))?;
                // The source renders every group href with a trailing slash;
                // the id is the href minus its final character.
                let mut chars = href.chars();
                chars.next_back();
                let id = chars.as_str().to_string();
                roster.groups.push(Group {
                    id,
                    name: text_of(link),
                    course_id,
                    inst_id,
                });
            }
        }
    }

    debug!(
        institutes = roster.institutes.len(),
        courses = roster.courses.len(),
        groups = roster.groups.len(),
        "roster parsed"
    );
    Ok(roster)
}
