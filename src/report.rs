//! 계산 결과를 텍스트 표, HTML 표, CSV, JSON으로 출력한다.
//!
//! 입력은 결과 섹션 또는 `섹션.키` 평면 맵이며, 일부 키만 있어도 그대로 출력한다.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::config::OutputFormat;
use crate::esp::{CalculationResult, ResultSection};
use crate::quantity::QuantityKind;
use crate::sweep::SweepPoint;

/// 출력 한 줄.
#[derive(Debug, Clone, PartialEq)]
struct Row {
    section: String,
    key: String,
    value: f64,
    unit: &'static str,
}

fn section_title(name: &str) -> &str {
    match name {
        "input_data" => "입력 데이터",
        "normalized_inputs" => "SI 환산 입력",
        "fluid_properties" => "유체 물성",
        "pressures" => "압력",
        "head" => "양정",
        "power" => "동력",
        "stages" => "펌프 단수",
        other => other,
    }
}

fn rows_from_sections(sections: &[ResultSection]) -> Vec<Row> {
    sections
        .iter()
        .flat_map(|s| {
            s.entries.iter().map(move |e| Row {
                section: s.name.to_string(),
                key: e.key.to_string(),
                value: e.value,
                unit: e.kind.unit_label(),
            })
        })
        .collect()
}

fn rows_from_flat_map(map: &BTreeMap<String, f64>) -> Vec<Row> {
    map.iter()
        .map(|(dotted, value)| {
            let (section, key) = dotted.split_once('.').unwrap_or(("", dotted.as_str()));
            Row {
                section: section.to_string(),
                key: key.to_string(),
                value: *value,
                unit: QuantityKind::from_key_suffix(key)
                    .map(QuantityKind::unit_label)
                    .unwrap_or(""),
            }
        })
        .collect()
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 쉼표, 큰따옴표, 줄바꿈이 있는 CSV 필드는 큰따옴표로 감싸고 내부 따옴표는 두 번 쓴다.
fn csv_field(s: &str) -> Cow<'_, str> {
    if s.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(s)
    }
}

fn render_text(rows: &[Row], decimals: usize) -> String {
    let key_width = rows.iter().map(|r| r.key.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    let mut current: Option<&str> = None;
    for row in rows {
        if current != Some(row.section.as_str()) {
            if current.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "[{}]", section_title(&row.section));
            current = Some(row.section.as_str());
        }
        let _ = writeln!(
            out,
            "  {:<key_width$}  {:>16.decimals$} {}",
            row.key, row.value, row.unit
        );
    }
    out
}

fn render_html(rows: &[Row], decimals: usize) -> String {
    let mut out = String::from("<table>\n");
    let mut current: Option<&str> = None;
    for row in rows {
        if current != Some(row.section.as_str()) {
            let _ = writeln!(
                out,
                "  <tr><th colspan=\"3\">{}</th></tr>",
                escape_html(section_title(&row.section))
            );
            current = Some(row.section.as_str());
        }
        let _ = writeln!(
            out,
            "  <tr><td>{}</td><td>{:.decimals$}</td><td>{}</td></tr>",
            escape_html(&row.key),
            row.value,
            escape_html(row.unit)
        );
    }
    out.push_str("</table>\n");
    out
}

fn render_csv(rows: &[Row], decimals: usize) -> String {
    let mut out = String::from("section,key,value,unit\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{},{},{:.decimals$},{}",
            csv_field(&row.section),
            csv_field(&row.key),
            row.value,
            csv_field(row.unit)
        );
    }
    out
}

fn render_rows(
    rows: &[Row],
    format: OutputFormat,
    decimals: usize,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(rows, decimals)),
        OutputFormat::Html => Ok(render_html(rows, decimals)),
        OutputFormat::Csv => Ok(render_csv(rows, decimals)),
        OutputFormat::Json => {
            let map: BTreeMap<String, f64> = rows
                .iter()
                .map(|r| (format!("{}.{}", r.section, r.key), r.value))
                .collect();
            serde_json::to_string_pretty(&map)
        }
    }
}

/// `섹션.키` 평면 맵을 출력한다. 섹션 접두어가 없는 키도 허용한다.
pub fn render_flat_map(
    map: &BTreeMap<String, f64>,
    format: OutputFormat,
    decimals: usize,
) -> Result<String, serde_json::Error> {
    render_rows(&rows_from_flat_map(map), format, decimals)
}

/// 계산 결과 전체를 출력한다. JSON 형식은 타입이 있는 전체 결과를 직렬화한다.
pub fn render_result(
    result: &CalculationResult,
    format: OutputFormat,
    decimals: usize,
) -> Result<String, serde_json::Error> {
    if format == OutputFormat::Json {
        return serde_json::to_string_pretty(result);
    }
    let mut out = render_rows(&rows_from_sections(&result.sections()), format, decimals)?;
    if format == OutputFormat::Text && !result.warnings.is_empty() {
        out.push_str("\n[경고]\n");
        for w in &result.warnings {
            let _ = writeln!(out, "  - {w}");
        }
    }
    Ok(out)
}

/// 민감도 분석 결과를 한 행에 한 점씩 출력한다. 실패한 점은 값 대신 오류를 적는다.
pub fn render_sweep(
    parameter: &str,
    points: &[SweepPoint],
    keys: &[&str],
    format: OutputFormat,
    decimals: usize,
) -> Result<String, serde_json::Error> {
    let cell = |point: &SweepPoint, key: &str| -> String {
        match &point.outcome {
            Ok(result) => result
                .get(key)
                .map(|v| format!("{v:.decimals$}"))
                .unwrap_or_else(|| "-".to_string()),
            Err(_) => "-".to_string(),
        }
    };
    let error_text = |point: &SweepPoint| -> String {
        point
            .outcome
            .as_ref()
            .err()
            .map(ToString::to_string)
            .unwrap_or_default()
    };

    let mut out = String::new();
    match format {
        OutputFormat::Html => {
            out.push_str("<table>\n  <tr>");
            let _ = write!(out, "<th>{}</th>", escape_html(parameter));
            for key in keys {
                let _ = write!(out, "<th>{}</th>", escape_html(key));
            }
            out.push_str("<th>error</th></tr>\n");
            for p in points {
                let _ = write!(out, "  <tr><td>{:.decimals$}</td>", p.value);
                for key in keys {
                    let _ = write!(out, "<td>{}</td>", cell(p, key));
                }
                let _ = writeln!(out, "<td>{}</td></tr>", escape_html(&error_text(p)));
            }
            out.push_str("</table>\n");
        }
        OutputFormat::Json => {
            let rows: Vec<BTreeMap<String, serde_json::Value>> = points
                .iter()
                .map(|p| {
                    let mut row = BTreeMap::new();
                    row.insert(parameter.to_string(), serde_json::json!(p.value));
                    for key in keys {
                        let v = p.outcome.as_ref().ok().and_then(|r| r.get(key));
                        row.insert(key.to_string(), serde_json::json!(v));
                    }
                    if let Err(e) = &p.outcome {
                        row.insert("error".to_string(), serde_json::json!(e.to_string()));
                    }
                    row
                })
                .collect();
            out = serde_json::to_string_pretty(&rows)?;
        }
        OutputFormat::Csv | OutputFormat::Text => {
            let csv = format == OutputFormat::Csv;
            let sep = if csv { "," } else { "\t" };
            let field = |s: &str| -> String {
                if csv {
                    csv_field(s).into_owned()
                } else {
                    s.to_string()
                }
            };
            out.push_str(&field(parameter));
            for key in keys {
                out.push_str(sep);
                out.push_str(&field(key));
            }
            out.push_str(sep);
            out.push_str("error\n");
            for p in points {
                let _ = write!(out, "{:.decimals$}", p.value);
                for key in keys {
                    out.push_str(sep);
                    out.push_str(&cell(p, key));
                }
                out.push_str(sep);
                out.push_str(&field(&error_text(p)));
                out.push('\n');
            }
        }
    }
    Ok(out)
}
