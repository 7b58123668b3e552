//! Sidebar markup for a workout.

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::types::Workout;

/// Render the `<li>` entry shown in the sidebar for `workout`.
///
/// ```html
/// <li class="workout workout--running" data-id="1">
///   <h2 class="workout__title">Running on April 14</h2>
///   <div class="workout__details">
///     <span class="workout__icon">🏃‍♂️</span>
///     <span class="workout__value">5</span>
///     <span class="workout__unit">km</span>
///   </div>
///   ...
/// </li>
/// ```
pub fn workout_entry(workout: &Workout) -> Result<String> {
    let mut w = Writer::new_with_indent(Vec::new(), b' ', 2);

    let class = format!("workout workout--{}", workout.kind());
    let id = workout.id().to_string();
    let mut li = BytesStart::new("li");
    li.push_attribute(("class", class.as_str()));
    li.push_attribute(("data-id", id.as_str()));
    w.write_event(Event::Start(li))?;

    text_element(&mut w, "h2", "workout__title", &workout.title())?;

    let metric = format!("{:.1}", workout.derived_metric());
    let details = [
        (workout.kind().icon(), workout.distance().to_string(), "km"),
        ("⏱", workout.duration().to_string(), "min"),
        ("⚡️", metric, workout.derived_metric_unit()),
        (
            workout.tertiary_icon(),
            workout.tertiary().to_string(),
            workout.tertiary_unit(),
        ),
    ];

    for (icon, value, unit) in &details {
        let mut div = BytesStart::new("div");
        div.push_attribute(("class", "workout__details"));
        w.write_event(Event::Start(div))?;
        text_element(&mut w, "span", "workout__icon", icon)?;
        text_element(&mut w, "span", "workout__value", value)?;
        text_element(&mut w, "span", "workout__unit", unit)?;
        w.write_event(Event::End(BytesEnd::new("div")))?;
    }

    w.write_event(Event::End(BytesEnd::new("li")))?;

    String::from_utf8(w.into_inner()).context("workout entry markup is not UTF-8")
}

fn text_element(w: &mut Writer<Vec<u8>>, tag: &str, class: &str, text: &str) -> Result<()> {
    let mut start = BytesStart::new(tag);
    start.push_attribute(("class", class));
    w.write_event(Event::Start(start))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
