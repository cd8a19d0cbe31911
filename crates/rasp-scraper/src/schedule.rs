use rasp_core::types::{DaySchedule, Discipline, Schedule};
use rasp_core::{RaspError, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::fetch::PageFetcher;

fn parse_err(element: &str) -> RaspError {
    RaspError::Parse {
        page: "schedule page".to_string(),
        element: element.to_string(),
    }
}

fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn required_cell(row: ElementRef, sel: &Selector, element: &str) -> Result<String> {
    row.select(sel)
        .next()
        .map(text_of)
        .ok_or_else(|| parse_err(element))
}

/// Fetch and parse one group's schedule page.
///
/// `group_name` comes from the roster cache — the schedule page itself is
/// never consulted for the display name.
pub async fn scrape_schedule(
    fetcher: &PageFetcher,
    group_id: &str,
    group_name: String,
) -> Result<Schedule> {
    let url = fetcher.schedule_url(group_id);
    let html = fetcher.fetch(&url).await?;
    let days = parse_schedule_days(&html)?;
    Ok(Schedule {
        id: group_id.to_string(),
        name: group_name,
        days,
    })
}

/// Parse the `#all_weeks` container of a schedule page.
///
/// The container's `h3`/`table` descendants alternate one day heading
/// followed by that day's table; they are walked in consecutive
/// non-overlapping pairs and an unpaired trailing element is discarded. Day
/// names keep the source whitespace; every other extracted field is trimmed.
pub fn parse_schedule_days(html: &str) -> Result<Vec<DaySchedule>> {
    let document = Html::parse_document(html);
    let weeks_sel = Selector::parse("#all_weeks").unwrap();
    let day_sel = Selector::parse("h3, table").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let hour_sel = Selector::parse(".time-hour").unwrap();
    let disc_sel = Selector::parse(".time-discipline").unwrap();
    let room_sel = Selector::parse(".time-room").unwrap();
    let weektype_sel = Selector::parse(".time-weektype").unwrap();
    let teacher_sel = Selector::parse(".time-prepod").unwrap();
    let event_type_sel = Selector::parse(".event-type").unwrap();
    let subgroup_sel = Selector::parse(".event-subgroup").unwrap();

    let container = document
        .select(&weeks_sel)
        .next()
        .ok_or_else(|| parse_err("#all_weeks container"))?;

    let nodes: Vec<ElementRef> = container.select(&day_sel).collect();

    let mut days = Vec::new();
    for (day_index, pair) in nodes.chunks_exact(2).enumerate() {
        let (header, table) = (pair[0], pair[1]);

        // Slot numbers carry forward across merged rows; the carry resets
        // with each day.
        let mut prev_number = String::new();
        let mut disciplines = Vec::new();

        for row in table.select(&tr_sel) {
            let number = match row.select(&hour_sel).next() {
                Some(hour) => {
                    let n = text_of(hour);
                    prev_number = n.clone();
                    n
                }
                None => prev_number.clone(),
            };

            let disc_cell = row
                .select(&disc_sel)
                .next()
                .ok_or_else(|| parse_err(".time-discipline cell"))?;
            let event_type_el = row
                .select(&event_type_sel)
                .next()
                .ok_or_else(|| parse_err(".event-type marker"))?;

            let third = disc_cell
                .children()
                .nth(2)
                .ok_or_else(|| parse_err("third node of .time-discipline"))?;
            let mut name = match ElementRef::wrap(third) {
                Some(el) => text_of(el),
                None => third
                    .value()
                    .as_text()
                    .map(|t| t.text.trim().to_string())
                    .unwrap_or_default(),
            };
            if name.is_empty() {
                // Merged markup renders the name as bare text right after the
                // event-type marker.
                if let Some(sibling) = event_type_el.next_sibling() {
                    if let Some(text) = sibling.value().as_text() {
                        name = text.text.trim().to_string();
                    }
                }
            }

            disciplines.push(Discipline {
                number,
                name,
                room: required_cell(row, &room_sel, ".time-room cell")?,
                week_type: required_cell(row, &weektype_sel, ".time-weektype cell")?,
                teacher: required_cell(row, &teacher_sel, ".time-prepod cell")?,
                event_type: text_of(event_type_el),
                event_subgroup: row
                    .select(&subgroup_sel)
                    .next()
                    .map(text_of)
                    .unwrap_or_default(),
            });
        }

        days.push(DaySchedule {
            index: day_index as u32,
            name: header.text().collect::<String>(),
            disciplines,
        });
    }

    debug!(days = days.len(), "schedule parsed");
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(header: &str, rows: &str) -> String {
        format!(
            r#"<div id="all_weeks"><h3>{header}</h3><table>{rows}</table></div>"#
        )
    }

    fn row(hour: &str, name: &str) -> String {
        let hour_cell = if hour.is_empty() {
            String::new()
        } else {
            format!(r#"<td class="time-hour">{hour}</td>"#)
        };
        format!(
            r#"<tr>{hour_cell}<td class="time-discipline"><span class="event-type">лек</span><br><b>{name}</b></td><td class="time-room">101</td><td class="time-weektype"></td><td class="time-prepod">Иванов</td></tr>"#
        )
    }

    #[test]
    fn parses_one_day_one_row() {
        let html = day("Понедельник", &row("1", "Математика"));
        let days = parse_schedule_days(&html).unwrap();

        assert_eq!(days.len(), 1);
        assert_eq!(days[0].index, 0);
        assert_eq!(days[0].name, "Понедельник");
        assert_eq!(days[0].disciplines.len(), 1);

        let d = &days[0].disciplines[0];
        assert_eq!(d.number, "1");
        assert_eq!(d.name, "Математика");
        assert_eq!(d.room, "101");
        assert_eq!(d.week_type, "");
        assert_eq!(d.teacher, "Иванов");
        assert_eq!(d.event_type, "лек");
        assert_eq!(d.event_subgroup, "");
    }

    #[test]
    fn day_name_keeps_source_whitespace() {
        let html = day(" Понедельник ", &row("1", "Математика"));
        let days = parse_schedule_days(&html).unwrap();
        assert_eq!(days[0].name, " Понедельник ");
    }

    #[test]
    fn slot_number_carries_forward_within_day() {
        let rows = format!("{}{}{}", row("3", "Физика"), row("", "Физика"), row("", "Физика"));
        let html = day("Вторник", &rows);
        let days = parse_schedule_days(&html).unwrap();

        let numbers: Vec<&str> = days[0]
            .disciplines
            .iter()
            .map(|d| d.number.as_str())
            .collect();
        assert_eq!(numbers, ["3", "3", "3"]);
    }

    #[test]
    fn carry_forward_resets_per_day() {
        let html = format!(
            r#"<div id="all_weeks"><h3>Пн</h3><table>{}</table><h3>Вт</h3><table>{}</table></div>"#,
            row("2", "Физика"),
            row("", "Химия"),
        );
        let days = parse_schedule_days(&html).unwrap();
        assert_eq!(days[0].disciplines[0].number, "2");
        // the second day never declared an hour, so the carry is empty
        assert_eq!(days[1].disciplines[0].number, "");
    }

    #[test]
    fn unpaired_trailing_element_is_dropped() {
        let html = format!(
            r#"<div id="all_weeks"><h3>Пн</h3><table>{r}</table><h3>Вт</h3><table>{r}</table><h3>Ср</h3></div>"#,
            r = row("1", "Математика"),
        );
        let days = parse_schedule_days(&html).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[1].index, 1);
    }

    #[test]
    fn empty_third_node_falls_back_to_text_after_event_type() {
        let html = r#"<div id="all_weeks"><h3>Пн</h3><table>
<tr><td class="time-hour">1</td><td class="time-discipline"><span class="event-type">лек</span> Математика <br><i></i></td><td class="time-room">101</td><td class="time-weektype"></td><td class="time-prepod">Иванов</td></tr>
</table></div>"#;
        let days = parse_schedule_days(html).unwrap();
        assert_eq!(days[0].disciplines[0].name, "Математика");
        assert_eq!(days[0].disciplines[0].event_type, "лек");
    }

    #[test]
    fn no_text_after_event_type_leaves_name_empty() {
        let html = r#"<div id="all_weeks"><h3>Пн</h3><table>
<tr><td class="time-hour">1</td><td class="time-discipline"><span class="event-type">лек</span><br><i></i></td><td class="time-room">101</td><td class="time-weektype"></td><td class="time-prepod">Иванов</td></tr>
</table></div>"#;
        let days = parse_schedule_days(html).unwrap();
        assert_eq!(days[0].disciplines[0].name, "");
    }

    #[test]
    fn subgroup_cell_is_optional() {
        let html = r#"<div id="all_weeks"><h3>Пн</h3><table>
<tr><td class="time-hour">1</td><td class="time-discipline"><span class="event-type">пр</span><br><b>Физика</b></td><td class="time-room">202</td><td class="time-weektype">чет</td><td class="time-prepod">Петров</td><td class="event-subgroup">1 п/г</td></tr>
</table></div>"#;
        let days = parse_schedule_days(html).unwrap();
        let d = &days[0].disciplines[0];
        assert_eq!(d.event_subgroup, "1 п/г");
        assert_eq!(d.week_type, "чет");
    }

    #[test]
    fn missing_weeks_container_is_parse_error() {
        let err = parse_schedule_days("<html><body></body></html>").unwrap_err();
        assert!(matches!(err, RaspError::Parse { .. }));
    }

    #[test]
    fn missing_room_cell_is_parse_error() {
        let html = r#"<div id="all_weeks"><h3>Пн</h3><table>
<tr><td class="time-hour">1</td><td class="time-discipline"><span class="event-type">лек</span><br><b>Математика</b></td><td class="time-weektype"></td><td class="time-prepod">Иванов</td></tr>
</table></div>"#;
        let err = parse_schedule_days(html).unwrap_err();
        assert!(matches!(err, RaspError::Parse { .. }));
    }

    #[test]
    fn empty_container_yields_no_days() {
        let days = parse_schedule_days(r#"<div id="all_weeks"></div>"#).unwrap();
        assert!(days.is_empty());
    }
}
