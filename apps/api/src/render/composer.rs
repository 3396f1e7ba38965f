//! Template Composer — maps a document aggregate into the final HTML string.
//!
//! Pure and deterministic: no I/O, no clock, no randomness. The same
//! aggregate, label set, and embedded photo always produce byte-identical
//! markup. Every human-visible string comes from the `LabelSet`; every
//! user-supplied value passes through `html_escape`.

use chrono::{Datelike, NaiveDate};

use crate::documents::models::DocumentType;
use crate::models::document::{
    DocumentAggregate, EducationRecordRow, PersonalInformationRow, RelativeRow, WorkExperienceRow,
};
use crate::render::labels::LabelSet;
use crate::render::photo::EmbeddedPhoto;

/// Page stylesheet. The portrait box dimensions are filled in from the
/// label set; the `page-break` class is what the PDF backend honors as a
/// forced break.
const STYLE_TEMPLATE: &str = r#"<style>
body {
    font-family: "Times New Roman", Times, serif;
    font-size: 12px;
    line-height: 1.4;
    max-width: 750px;
    margin: 0 auto;
    padding: 15px;
}
h1 {
    text-align: center;
    font-size: 16px;
    font-weight: bold;
    margin-bottom: 5px;
    margin-top: 0;
}
h2 {
    text-align: center;
    font-size: 14px;
    font-weight: bold;
    margin-top: 20px;
    margin-bottom: 6px;
}
.name-title {
    text-align: center;
    font-size: 13px;
    font-weight: bold;
    margin-bottom: 10px;
}
.current-position {
    text-align: left;
    font-size: 12px;
    margin-bottom: 6px;
    padding-right: 140px;
}
.photo-container {
    position: absolute;
    top: 60px;
    right: 20px;
    width: {photo_width}px;
    height: {photo_height}px;
}
.photo-container img {
    width: {photo_width}px;
    height: {photo_height}px;
    border: 1px solid #000;
}
.info-section {
    margin-top: 15px;
    padding-right: 120px;
}
.info-label {
    font-size: 12px;
    font-weight: bold;
    display: block;
}
.info-value {
    font-size: 11px;
    display: block;
}
.two-column {
    width: 100%;
    margin-top: 8px;
    margin-bottom: 8px;
}
.two-column td {
    width: 50%;
    vertical-align: top;
    padding-right: 10px;
}
table.relatives-table {
    width: 100%;
    border-collapse: collapse;
    margin-top: 15px;
    font-size: 11px;
}
table.relatives-table th,
table.relatives-table td {
    border: 1px solid #000;
    padding: 6px;
    text-align: center;
    vertical-align: middle;
}
table.relatives-table th {
    font-weight: bold;
}
.section-title {
    text-align: center;
    font-weight: bold;
    font-size: 14px;
    margin-top: 25px;
    margin-bottom: 15px;
}
.page-break {
    page-break-before: always !important;
    break-before: page !important;
    page-break-inside: avoid !important;
}
.work-history {
    margin-top: 15px;
    padding-left: 20px;
    padding-right: 20px;
    line-height: 1.6;
}
</style>"#;

/// Composes the full document markup.
pub fn compose_document_html(
    aggregate: &DocumentAggregate,
    labels: &LabelSet,
    photo: Option<&EmbeddedPhoto>,
) -> String {
    let document_type = DocumentType::parse(&aggregate.document.document_type);
    let pi = aggregate.personal_information.as_ref();
    let full_name = pi.map(full_name).unwrap_or_default();

    let mut html = String::new();
    html.push_str("<html><head><meta charset=\"UTF-8\"></head><body>");
    html.push_str(&stylesheet(labels));

    // ── First page ──

    html.push_str(&format!("<h1>{}</h1>", labels.document_title(document_type)));
    html.push_str(&format!(
        "<div class=\"name-title\">{}</div>",
        html_escape(&full_name)
    ));

    // Current position: only on the reference document, only when work
    // history exists.
    if document_type == Some(DocumentType::Obyektivka) && pi.is_some() {
        if let Some(current) = current_work(&aggregate.work_experiences) {
            html.push_str("<div class=\"current-position\">");
            html.push_str(&current_position_date(current.start_date, labels));
            html.push_str("<br>");
            html.push_str(&format!("<strong>{}</strong>", html_escape(&current.info)));
            html.push_str("</div>");
        }
    }

    if let Some(photo) = photo {
        html.push_str(&format!(
            "<div class=\"photo-container\"><img src=\"{}\" /></div>",
            photo.data_uri
        ));
    }

    if let Some(pi) = pi {
        html.push_str(&info_section(pi, &aggregate.education_records, labels));
    }

    // Work history narrative, in storage order.
    html.push_str(&format!(
        "<div class=\"section-title\">{}</div>",
        labels.work_history_title
    ));
    html.push_str("<div class=\"work-history\">");
    if aggregate.work_experiences.is_empty() {
        html.push_str(&format!(
            "<div style=\"margin-bottom: 8px;\">{}</div>",
            labels.no_work_history
        ));
    } else {
        for work in &aggregate.work_experiences {
            html.push_str("<div style=\"margin-bottom: 8px; line-height: 1.6;\">");
            html.push_str(&format!(
                "<p>{} - {}</p>",
                html_escape(&work_date_range(work, labels)),
                html_escape(&work.info)
            ));
            html.push_str("</div>");
        }
    }
    html.push_str("</div>");

    // ── Second page: relatives, only when any exist ──

    if !aggregate.relatives.is_empty() {
        html.push_str(&relatives_page(&full_name, &aggregate.relatives, labels));
    }

    html.push_str("</body></html>");
    html
}

/// Family, given, and patronymic names space-joined and trimmed.
pub fn full_name(pi: &PersonalInformationRow) -> String {
    format!("{} {} {}", pi.familya, pi.ism, pi.sharif)
        .trim()
        .to_string()
}

/// Selects the "current position" record: the open-ended entry with the
/// highest order index, or the last stored entry if none is open-ended.
pub fn current_work(entries: &[WorkExperienceRow]) -> Option<&WorkExperienceRow> {
    let mut current: Option<&WorkExperienceRow> = None;
    for entry in entries {
        if entry.end_date.is_none() {
            match current {
                Some(best) if entry.order_index <= best.order_index => {}
                _ => current = Some(entry),
            }
        }
    }
    current.or_else(|| entries.last())
}

/// Escapes user-supplied text for HTML (both quote styles included).
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn stylesheet(labels: &LabelSet) -> String {
    STYLE_TEMPLATE
        .replace("{photo_width}", &labels.photo_box.width.to_string())
        .replace("{photo_height}", &labels.photo_box.height.to_string())
}

/// "2018 йил 09 январдан:" — year, year-word, zero-padded day, month name,
/// "from" suffix.
fn current_position_date(start: NaiveDate, labels: &LabelSet) -> String {
    format!(
        "{} {} {:02} {}{}",
        start.year(),
        labels.year_word,
        start.day(),
        labels.month_name(start.month()),
        labels.current_from_suffix
    )
}

/// "2010-2015 йй." for a closed range, "2018 й. ҳ.в." for an ongoing one.
fn work_date_range(work: &WorkExperienceRow, labels: &LabelSet) -> String {
    match work.end_date {
        Some(end) => format!(
            "{}-{} {}",
            work.start_date.year(),
            end.year(),
            labels.years_range_suffix
        ),
        None => format!(
            "{} {} {}",
            work.start_date.year(),
            labels.year_suffix,
            labels.present_suffix
        ),
    }
}

fn info_section(
    pi: &PersonalInformationRow,
    education_records: &[EducationRecordRow],
    labels: &LabelSet,
) -> String {
    let mut html = String::from("<div class=\"info-section\">");

    html.push_str(&two_column(
        &info_row(
            labels.birth_date,
            &pi.tugilgan_sana.format("%d.%m.%Y").to_string(),
        ),
        Some(info_row(labels.birth_place, &html_escape(&pi.tugilgan_joyi))),
    ));

    html.push_str(&two_column(
        &info_row(labels.nationality, &html_escape(&pi.millati)),
        Some(info_row(
            labels.party,
            &opt_value(&pi.partiyaviyligi, labels.none_label),
        )),
    ));

    // Only the first education record is shown on the form — additional
    // records are stored but not rendered here.
    if let Some(first) = education_records.first() {
        html.push_str(&two_column(
            &info_row(labels.education, &html_escape(&first.malumoti)),
            Some(info_row(
                labels.graduated,
                &opt_value(&first.tamomlagan, labels.dash),
            )),
        ));
        html.push_str(&two_column(
            &info_row(
                labels.specialty,
                &opt_value(&first.mutaxassisligi, labels.dash),
            ),
            None,
        ));
        html.push_str(&two_column(
            &info_row(
                labels.degree,
                &opt_value(&first.ilmiy_daraja, labels.none_label),
            ),
            Some(info_row(
                labels.academic_title,
                &opt_value(&first.ilmiy_unvoni, labels.none_label),
            )),
        ));
        html.push_str(&two_column(
            &info_row(
                labels.languages,
                &opt_value(&first.chet_tillari, labels.dash),
            ),
            Some(info_row(
                labels.special_rank,
                &opt_value(&first.maxsus_unvoni, labels.none_label),
            )),
        ));
        html.push_str(&info_row(
            labels.state_award,
            &opt_value(&first.davlat_mukofoti, labels.none_label),
        ));
    } else {
        html.push_str(&two_column(
            &info_row(labels.education, labels.dash),
            Some(info_row(labels.graduated, labels.dash)),
        ));
    }

    html.push_str(&info_row(
        labels.elected_bodies,
        &opt_value(&pi.xalq_deputatlari, labels.none_label),
    ));

    html.push_str("</div>");
    html
}

fn relatives_page(full_name: &str, relatives: &[RelativeRow], labels: &LabelSet) -> String {
    let mut html = String::from("<div class=\"page-break\">");
    html.push_str(&format!(
        "<div class=\"name-title\" style=\"margin-top: 20px;\">{} {}</div>",
        html_escape(full_name),
        labels.relatives_about_suffix
    ));
    html.push_str(&format!("<h2>{}</h2>", labels.relatives_info_heading));

    html.push_str("<table class=\"relatives-table\"><thead><tr>");
    html.push_str(&format!(
        "<th style=\"width: 12%;\">{}</th>",
        labels.col_relation
    ));
    html.push_str(&format!(
        "<th style=\"width: 22%;\">{}</th>",
        labels.col_full_name
    ));
    html.push_str(&format!(
        "<th style=\"width: 18%;\">{}</th>",
        labels.col_birth
    ));
    html.push_str(&format!(
        "<th style=\"width: 25%;\">{}</th>",
        labels.col_workplace
    ));
    html.push_str(&format!(
        "<th style=\"width: 23%;\">{}</th>",
        labels.col_residence
    ));
    html.push_str("</tr></thead><tbody>");

    for relative in relatives {
        html.push_str("<tr>");
        html.push_str(&format!("<td>{}</td>", html_escape(&relative.qarindoshligi)));
        html.push_str(&format!("<td>{}</td>", html_escape(&relative.fio)));

        // Birth cell, with the inline death annotation when applicable.
        html.push_str(&format!("<td>{}", html_escape(&relative.tugilgan)));
        if relative.vafot_etgan {
            html.push_str(&format!("<br>({}", labels.deceased_note));
            if let Some(year) = &relative.vafot_etgan_yili {
                html.push_str(&format!(", {} {}", html_escape(year), labels.year_word));
            }
            html.push_str(")");
        }
        html.push_str("</td>");

        if relative.vafot_etgan {
            html.push_str(&format!(
                "<td>{}</td>",
                opt_value(&relative.kasbi, labels.dash)
            ));
            html.push_str(&format!("<td>{}</td>", labels.dash));
        } else {
            html.push_str(&format!(
                "<td>{}</td>",
                opt_value(&relative.ish_joyi, labels.dash)
            ));
            html.push_str(&format!(
                "<td>{}</td>",
                opt_value(&relative.turar_joyi, labels.dash)
            ));
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table></div>");
    html
}

fn info_row(label: &str, value: &str) -> String {
    format!(
        "<div class=\"info-row\"><div class=\"info-label\">{label}</div><div class=\"info-value\">{value}</div></div>"
    )
}

fn two_column(left: &str, right: Option<String>) -> String {
    let mut html = String::from("<table class=\"two-column\" style=\"border: none;\"><tr>");
    html.push_str(&format!("<td style=\"border: none;\">{left}</td>"));
    if let Some(right) = right {
        html.push_str(&format!("<td style=\"border: none;\">{right}</td>"));
    }
    html.push_str("</tr></table>");
    html
}

fn opt_value(value: &Option<String>, placeholder: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => html_escape(v),
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{DocumentRow, EducationRecordRow};
    use crate::render::labels::{UZBEK_CYRILLIC, UZBEK_LATIN};
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn document_row(document_type: &str) -> DocumentRow {
        let ts = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        DocumentRow {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            document_type: document_type.to_string(),
            status: "draft".to_string(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn personal_information() -> PersonalInformationRow {
        let ts = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        PersonalInformationRow {
            id: Uuid::nil(),
            document_id: Uuid::nil(),
            familya: "Каримов".to_string(),
            ism: "Анвар".to_string(),
            sharif: "Тошевич".to_string(),
            photo_path: None,
            joriy_lavozim_sanasi: None,
            joriy_lavozim_toliq: None,
            tugilgan_sana: date(1975, 3, 14),
            tugilgan_joyi: "Самарқанд шаҳри".to_string(),
            millati: "ўзбек".to_string(),
            partiyaviyligi: None,
            xalq_deputatlari: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn education_record(order_index: i32, tamomlagan: &str) -> EducationRecordRow {
        let ts = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        EducationRecordRow {
            id: Uuid::nil(),
            document_id: Uuid::nil(),
            malumoti: "Олий".to_string(),
            tamomlagan: Some(tamomlagan.to_string()),
            mutaxassisligi: Some("ҳуқуқшунос".to_string()),
            ilmiy_daraja: None,
            ilmiy_unvoni: None,
            chet_tillari: None,
            maxsus_unvoni: None,
            davlat_mukofoti: None,
            order_index,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn work(order_index: i32, start: NaiveDate, end: Option<NaiveDate>, info: &str) -> WorkExperienceRow {
        let ts = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        WorkExperienceRow {
            id: Uuid::nil(),
            document_id: Uuid::nil(),
            start_date: start,
            end_date: end,
            info: info.to_string(),
            order_index,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn relative(vafot_etgan: bool) -> RelativeRow {
        let ts = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        RelativeRow {
            id: Uuid::nil(),
            document_id: Uuid::nil(),
            qarindoshligi: "Otasi".to_string(),
            fio: "Каримов Тоша".to_string(),
            tugilgan: "1941 йил, Самарқанд".to_string(),
            vafot_etgan,
            ish_joyi: if vafot_etgan { None } else { Some("нафақада".to_string()) },
            turar_joyi: if vafot_etgan { None } else { Some("Самарқанд шаҳри".to_string()) },
            vafot_etgan_yili: if vafot_etgan { Some("2003".to_string()) } else { None },
            kasbi: if vafot_etgan { Some("деҳқон".to_string()) } else { None },
            order_index: 0,
            created_at: ts,
            updated_at: ts,
        }
    }

    fn aggregate() -> DocumentAggregate {
        DocumentAggregate {
            document: document_row("obyektivka"),
            personal_information: Some(personal_information()),
            education_records: vec![education_record(0, "1997 й. ТошДУ")],
            relatives: vec![relative(false)],
            work_experiences: vec![work(0, date(2018, 1, 9), None, "Адлия вазирлиги мутахассиси")],
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let agg = aggregate();
        let first = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        let second = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_title_follows_document_type() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(html.contains("<h1>МАЪЛУМОТНОМА</h1>"));

        let mut agg = aggregate();
        agg.document.document_type = "employment_application".to_string();
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(html.contains("<h1>ИШГА ОЛИШ БЎЙИЧА АРИЗА</h1>"));
    }

    #[test]
    fn test_full_name_is_composed_and_trimmed() {
        let pi = personal_information();
        assert_eq!(full_name(&pi), "Каримов Анвар Тошевич");

        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(html.contains("<div class=\"name-title\">Каримов Анвар Тошевич</div>"));
    }

    #[test]
    fn test_current_position_shows_open_ended_record_with_month_name() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(html.contains("2018 йил 09 январдан:"));
        assert!(html.contains("<strong>Адлия вазирлиги мутахассиси</strong>"));
    }

    #[test]
    fn test_current_position_prefers_highest_order_open_ended_record() {
        let entries = vec![
            work(0, date(2010, 5, 1), None, "first"),
            work(1, date(2015, 9, 1), Some(date(2017, 1, 1)), "closed"),
            work(2, date(2018, 1, 9), None, "latest"),
        ];
        assert_eq!(current_work(&entries).unwrap().info, "latest");
    }

    #[test]
    fn test_current_position_falls_back_to_last_record() {
        let entries = vec![
            work(0, date(2010, 5, 1), Some(date(2012, 1, 1)), "old"),
            work(1, date(2015, 9, 1), Some(date(2017, 1, 1)), "last"),
        ];
        assert_eq!(current_work(&entries).unwrap().info, "last");
    }

    #[test]
    fn test_current_position_absent_for_other_document_types() {
        let mut agg = aggregate();
        agg.document.document_type = "employment_application".to_string();
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(!html.contains("class=\"current-position\""));
    }

    #[test]
    fn test_current_position_absent_without_work_history() {
        let mut agg = aggregate();
        agg.work_experiences.clear();
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(!html.contains("class=\"current-position\""));
        assert!(html.contains("Мавжуд эмас"));
    }

    #[test]
    fn test_only_first_education_record_is_rendered() {
        let mut agg = aggregate();
        agg.education_records = vec![
            education_record(0, "1997 й. ТошДУ"),
            education_record(1, "2005 й. ЖИДУ"),
        ];
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(html.contains("1997 й. ТошДУ"));
        assert!(!html.contains("2005 й. ЖИДУ"));
    }

    #[test]
    fn test_nullable_fields_render_placeholders_with_labels() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        // Party affiliation is None — label still present, value is the none placeholder
        assert!(html.contains("Партиявийлиги:"));
        assert!(html.contains("йўқ"));
        // Scientific degree of the first education record is None
        assert!(html.contains("Илмий даражаси:"));
    }

    #[test]
    fn test_work_history_year_ranges() {
        let mut agg = aggregate();
        agg.work_experiences = vec![
            work(0, date(2010, 2, 1), Some(date(2015, 6, 1)), "collegium"),
            work(1, date(2018, 1, 9), None, "ministry"),
        ];
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(html.contains("2010-2015 йй. - collegium"));
        assert!(html.contains("2018 й. ҳ.в. - ministry"));
    }

    #[test]
    fn test_work_history_keeps_storage_order() {
        let mut agg = aggregate();
        agg.work_experiences = vec![
            work(0, date(2018, 1, 9), None, "newest-first"),
            work(1, date(2010, 2, 1), Some(date(2015, 6, 1)), "older"),
        ];
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        let newest = html.find("newest-first").unwrap();
        let older = html.find("older").unwrap();
        assert!(newest < older);
    }

    #[test]
    fn test_relatives_page_only_when_relatives_exist() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(html.contains("class=\"page-break\""));
        assert!(html.contains("яқин қариндошлари хақида"));

        let mut agg = aggregate();
        agg.relatives.clear();
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(!html.contains("class=\"page-break\""));
    }

    #[test]
    fn test_deceased_relative_cells_and_annotation() {
        let mut agg = aggregate();
        agg.relatives = vec![relative(true)];
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(html.contains("<br>(вафот этган, 2003 йил)"));
        // Occupation shown in the workplace column, dash in residence
        assert!(html.contains("<td>деҳқон</td><td>-</td>"));
    }

    #[test]
    fn test_living_relative_cells() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(html.contains("<td>нафақада</td><td>Самарқанд шаҳри</td>"));
        assert!(!html.contains("вафот этган"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut agg = aggregate();
        agg.relatives[0].fio = "<script>alert(1)</script>".to_string();
        agg.work_experiences[0].info = "A & B \"quoted\"".to_string();
        let html = compose_document_html(&agg, &UZBEK_CYRILLIC, None);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("A &amp; B &quot;quoted&quot;"));
    }

    #[test]
    fn test_photo_block_rendered_only_when_embedded() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(!html.contains("photo-container\"><img"));

        let photo = EmbeddedPhoto {
            data_uri: "data:image/jpeg;base64,AAAA".to_string(),
        };
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, Some(&photo));
        assert!(html.contains("<div class=\"photo-container\"><img src=\"data:image/jpeg;base64,AAAA\" /></div>"));
    }

    #[test]
    fn test_photo_box_dimensions_come_from_labels() {
        let cyr = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(cyr.contains("width: 100px"));
        assert!(cyr.contains("height: 133px"));

        let lat = compose_document_html(&aggregate(), &UZBEK_LATIN, None);
        assert!(lat.contains("width: 85px"));
        assert!(lat.contains("height: 113px"));
    }

    #[test]
    fn test_latin_variant_labels_and_months() {
        let html = compose_document_html(&aggregate(), &UZBEK_LATIN, None);
        assert!(html.contains("<h1>MA'LUMOTNOMA</h1>"));
        assert!(html.contains("2018 yil 09 yanvardan:"));
        assert!(html.contains("MEHNAT FAOLIYATI"));
    }

    #[test]
    fn test_birth_date_format() {
        let html = compose_document_html(&aggregate(), &UZBEK_CYRILLIC, None);
        assert!(html.contains("14.03.1975"));
    }

    #[test]
    fn test_html_escape_covers_both_quote_styles() {
        assert_eq!(html_escape("a'b\"c"), "a&#039;b&quot;c");
        assert_eq!(html_escape("x<y>&z"), "x&lt;y&gt;&amp;z");
        assert_eq!(html_escape("тоза матн"), "тоза матн");
    }
}
