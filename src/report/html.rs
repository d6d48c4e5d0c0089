// src/report/html.rs
//
// Pure templating: records and extracted insights in, one self-contained
// dark/gold themed HTML document out. Every user-supplied string passes
// through `esc` before interpolation.

use crate::extractors::field::{fold, resolve};
use crate::extractors::table::Record;
use crate::report::config::ReportConfig;
use crate::report::metrics::{leading_int, LeadMetrics, SCORE_FIELDS, STATUS_FIELDS};
use crate::report::Insights;

// Field-name synonyms for the per-lead card, tried in order.
const NAME_FIELDS: &[&str] = &["Lead ID", "Nombre", "ID", "conversation"];
const COURSE_FIELDS: &[&str] = &["Curso"];
const URGENCY_FIELDS: &[&str] = &["Urgencia"];
const OBJECTION_FIELDS: &[&str] = &["Objecion", "Objeciones"];
const NEXT_ACTION_FIELDS: &[&str] = &["Proxima", "Siguiente", "Accion"];
const MESSAGE_FIELDS: &[&str] = &["Mensaje"];
const PRIORITY_FIELDS: &[&str] = &["Prioridad"];
const CLOSING_FIELDS: &[&str] = &["Cierre"];
const SESSION_FIELDS: &[&str] = &["session_id", "Session ID", "session", "telefono", "phone"];
const CONTACT_FIELDS: &[&str] = &["Contacto", "Contact"];

/// Escapes the characters HTML cannot carry verbatim: `& < > "`.
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// CSS class for the status accent color.
fn state_class(status: &str) -> &'static str {
    let folded = fold(status);
    if folded.contains("hot") {
        "hot"
    } else if folded.contains("warm") {
        "warm"
    } else {
        "cold"
    }
}

/// CSS class for the score ring: >= 75 high, >= 50 mid, else low.
fn score_class(score: &str) -> &'static str {
    let n = leading_int(score).unwrap_or(0);
    if n >= 75 {
        "high"
    } else if n >= 50 {
        "mid"
    } else {
        "low"
    }
}

fn priority_badge(priority: &str) -> &'static str {
    let upper = priority.to_uppercase();
    if upper.contains("P1") {
        r#"<span class="badge badge-p1">P1</span>"#
    } else if upper.contains("P2") {
        r#"<span class="badge badge-p2">P2</span>"#
    } else {
        r#"<span class="badge badge-p3">P3</span>"#
    }
}

fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return "<li>Sin datos</li>".to_string();
    }
    items
        .iter()
        .map(|i| format!("<li>{}</li>", esc(i)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_questions(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, q)| {
            format!(
                r#"<div class="pregunta-item" data-n="{:02}">{}</div>"#,
                i + 1,
                esc(q)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_lead_cards(records: &[Record]) -> String {
    if records.is_empty() {
        return r#"<div class="raw-md">No se pudieron parsear leads del Markdown recibido.</div>"#
            .to_string();
    }

    records.iter().map(render_lead_card).collect::<Vec<_>>().join("\n")
}

fn render_lead_card(record: &Record) -> String {
    let status = resolve(record, STATUS_FIELDS);
    let score = resolve(record, SCORE_FIELDS);
    let course = resolve(record, COURSE_FIELDS);
    let urgency = resolve(record, URGENCY_FIELDS);
    let objections = resolve(record, OBJECTION_FIELDS);
    let next_action = resolve(record, NEXT_ACTION_FIELDS);
    let message = resolve(record, MESSAGE_FIELDS);
    let priority = resolve(record, PRIORITY_FIELDS);
    let closing = resolve(record, CLOSING_FIELDS);
    let session_id = {
        let s = resolve(record, SESSION_FIELDS);
        if s.is_empty() {
            resolve(record, CONTACT_FIELDS)
        } else {
            s
        }
    };
    let name = {
        let n = resolve(record, NAME_FIELDS);
        if n.is_empty() {
            if session_id.is_empty() {
                "Sin ID"
            } else {
                session_id
            }
        } else {
            n
        }
    };
    let sc = state_class(status);

    let tags = objections
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| format!(r#"<span class="tag">{}</span>"#, esc(t)))
        .collect::<Vec<_>>()
        .join("");

    let urgency_html = if urgency.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="urgencia">Urgencia: {}</span>"#, esc(urgency))
    };
    let closing_html = if closing.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="urgencia">Cierre: {}</span>"#, esc(closing))
    };
    let phone_html = if session_id.is_empty() {
        String::new()
    } else {
        let digits: String = session_id.chars().filter(char::is_ascii_digit).collect();
        format!(
            r#"<div class="lead-phone"><span class="phone-icon">&#128222;</span><a href="https://wa.me/{}" class="phone-link">{}</a></div>"#,
            digits,
            esc(session_id)
        )
    };
    let course_html = if course.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="lead-curso">{}</div>"#, esc(course))
    };
    let tags_html = if tags.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="lead-tags">{tags}</div>"#)
    };
    let action_html = if next_action.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="lead-action"><strong>Proxima accion:</strong> {}</div>"#,
            esc(next_action)
        )
    };
    let message_html = if message.is_empty() {
        String::new()
    } else {
        format!(
            r#"<div class="msg-box"><div class="msg-label">Mensaje recomendado</div>"{}"</div>"#,
            esc(message)
        )
    };

    format!(
        r#"<div class="lead-card {sc}">
  <div>
    <div class="lead-top">
      <span class="lead-id">{name}</span>
      <span class="badge badge-{sc}">{status}</span>
      {priority_badge}
      {urgency_html}
      {closing_html}
    </div>
    {phone_html}
    {course_html}
    {tags_html}
    {action_html}
    {message_html}
  </div>
  <div class="score-block">
    <div class="score-ring {score_class}">{score}</div>
    <div class="score-label">Score</div>
  </div>
</div>"#,
        sc = sc,
        name = esc(name),
        status = esc(status),
        priority_badge = priority_badge(priority),
        urgency_html = urgency_html,
        closing_html = closing_html,
        phone_html = phone_html,
        course_html = course_html,
        tags_html = tags_html,
        action_html = action_html,
        message_html = message_html,
        score_class = score_class(score),
        score = esc(score),
    )
}

fn render_script_card(label: &str, class: &str, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="guion-card"><div class="guion-tipo {class}">{label}</div><div class="guion-text">"{}"</div></div>"#,
        esc(text)
    )
}

fn render_scripts_section(insights: &Insights) -> String {
    if insights.script_hot.is_empty()
        && insights.script_warm.is_empty()
        && insights.script_cold.is_empty()
    {
        return String::new();
    }
    format!(
        r#"<div class="section-title">Guiones por Tipo de Lead</div>
<div class="guiones">
{}{}{}</div>
"#,
        render_script_card("Hot", "hot", &insights.script_hot),
        render_script_card("Warm", "warm", &insights.script_warm),
        render_script_card("Cold", "cold", &insights.script_cold),
    )
}

fn render_questions_section(insights: &Insights) -> String {
    if insights.questions.is_empty() {
        return String::new();
    }
    format!(
        r#"<div class="section-title">Preguntas de Calificacion</div>
<div class="preguntas-grid">
{}
</div>
"#,
        render_questions(&insights.questions)
    )
}

/// Renders the complete report document.
pub fn render_document(
    records: &[Record],
    insights: &Insights,
    metrics: &LeadMetrics,
    period: &str,
    config: &ReportConfig,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Reporte Semanal de Leads</title>
<link href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@700;900&family=DM+Sans:wght@300;400;500;600&display=swap" rel="stylesheet">
<style>{css}</style>
</head>
<body>

<header class="header">
  <div class="header-left">
    <h1>Reporte<br><span>Semanal</span><br>de Leads</h1>
    <p class="subtitle">{brand} &mdash; {tagline}</p>
  </div>
  <div class="header-right">
    <div class="date-label">Semana del</div>
    <div class="date-value">{period}</div>
  </div>
</header>

<div class="kpi-strip">
  <div class="kpi">
    <div class="kpi-number">{total}</div>
    <div class="kpi-label">Leads Analizados</div>
  </div>
  <div class="kpi">
    <div class="kpi-number" style="color:var(--hot)">{hot}</div>
    <div class="kpi-label">Leads Hot</div>
  </div>
  <div class="kpi">
    <div class="kpi-number" style="color:var(--warm)">{warm}</div>
    <div class="kpi-label">Leads Warm</div>
  </div>
  <div class="kpi">
    <div class="kpi-number" style="color:var(--gold)">{avg_score}</div>
    <div class="kpi-label">Score Promedio</div>
  </div>
</div>

<div class="section-title">Analisis Individual de Leads</div>
<div class="leads-grid">
{lead_cards}
</div>

<div class="section-title">Insights de la Semana</div>
<div class="insights-grid">
  <div class="insight-card">
    <h4>Objeciones Frecuentes</h4>
    <ul>{objections}</ul>
  </div>
  <div class="insight-card">
    <h4>Cursos Mas Solicitados</h4>
    <ul>{courses}</ul>
  </div>
  <div class="insight-card">
    <h4>Puntos de Caida</h4>
    <ul>{drop_offs}</ul>
  </div>
  <div class="insight-card">
    <h4>Recomendaciones</h4>
    <ul>{recommendations}</ul>
  </div>
</div>

{scripts_section}{questions_section}<footer class="footer">
  <div class="footer-brand">{brand}</div>
  <div class="footer-note">
    Generado automaticamente<br>
    {period} &mdash; {total} leads procesados
  </div>
</footer>

</body>
</html>"#,
        css = STYLE,
        brand = esc(&config.brand),
        tagline = esc(&config.tagline),
        period = esc(period),
        total = metrics.total,
        hot = metrics.hot,
        warm = metrics.warm,
        avg_score = metrics.avg_score,
        lead_cards = render_lead_cards(records),
        objections = render_list(&insights.objections),
        courses = render_list(&insights.courses),
        drop_offs = render_list(&insights.drop_offs),
        recommendations = render_list(&insights.recommendations),
        scripts_section = render_scripts_section(insights),
        questions_section = render_questions_section(insights),
    )
}

/// Inline stylesheet for the dark/gold theme.
const STYLE: &str = r#"
  :root{--gold:#C9A84C;--gold-light:#E8C96A;--dark:#0F0F0F;--dark-2:#1A1A1A;--dark-3:#252525;
    --dark-4:#2E2E2E;--white:#F5F0EA;--white-dim:#B8B0A4;--hot:#E05A5A;--warm:#E0964A;
    --cold:#5A8AE0;--p2:#8A7A5A;--p3:#5A5A5A;}
  *{margin:0;padding:0;box-sizing:border-box;}
  body{background:var(--dark);color:var(--white);font-family:'DM Sans',sans-serif;
    font-weight:300;line-height:1.6;max-width:860px;margin:0 auto;padding:40px 24px;}
  .header{border-top:3px solid var(--gold);padding-top:32px;margin-bottom:48px;
    display:flex;justify-content:space-between;align-items:flex-start;gap:24px;}
  .header-left h1{font-family:'Playfair Display',serif;font-size:2.6rem;font-weight:900;
    color:var(--white);line-height:1.1;letter-spacing:-0.02em;}
  .header-left h1 span{color:var(--gold);}
  .header-left .subtitle{font-size:0.78rem;letter-spacing:0.18em;text-transform:uppercase;
    color:var(--white-dim);margin-top:8px;}
  .header-right{text-align:right;flex-shrink:0;}
  .date-label{font-size:0.7rem;letter-spacing:0.15em;text-transform:uppercase;color:var(--white-dim);}
  .date-value{font-family:'Playfair Display',serif;font-size:1.1rem;color:var(--gold);margin-top:4px;}
  .kpi-strip{display:grid;grid-template-columns:repeat(4,1fr);gap:2px;margin-bottom:48px;border:1px solid var(--dark-4);}
  .kpi{background:var(--dark-2);padding:20px 18px;text-align:center;}
  .kpi-number{font-family:'Playfair Display',serif;font-size:2.2rem;font-weight:700;color:var(--gold);line-height:1;}
  .kpi-label{font-size:0.68rem;letter-spacing:0.12em;text-transform:uppercase;color:var(--white-dim);margin-top:6px;}
  .section-title{font-size:0.68rem;letter-spacing:0.22em;text-transform:uppercase;color:var(--gold);
    margin-bottom:20px;padding-bottom:8px;border-bottom:1px solid var(--dark-4);}
  .leads-grid{display:flex;flex-direction:column;gap:3px;margin-bottom:48px;}
  .lead-card{background:var(--dark-2);border-left:3px solid var(--dark-4);padding:20px 24px;
    display:grid;grid-template-columns:1fr auto;gap:16px;align-items:start;}
  .lead-card.hot{border-left-color:var(--hot);}
  .lead-card.warm{border-left-color:var(--warm);}
  .lead-card.cold{border-left-color:var(--cold);}
  .lead-top{display:flex;align-items:center;gap:12px;margin-bottom:10px;flex-wrap:wrap;}
  .lead-id{font-family:'Playfair Display',serif;font-size:0.95rem;font-weight:700;color:var(--white);}
  .badge{font-size:0.6rem;letter-spacing:0.15em;text-transform:uppercase;padding:3px 9px;font-weight:600;}
  .badge-hot{background:var(--hot);color:#fff;} .badge-warm{background:var(--warm);color:#fff;}
  .badge-cold{background:var(--cold);color:#fff;} .badge-p1{background:var(--gold);color:var(--dark);}
  .badge-p2{background:var(--p2);color:#fff;} .badge-p3{background:var(--p3);color:#fff;}
  .lead-phone{display:flex;align-items:center;gap:8px;margin-bottom:8px;padding:6px 10px;
    background:var(--dark-3);border-left:2px solid var(--gold);width:fit-content;}
  .phone-icon{font-size:0.85rem;}
  .phone-link{font-size:0.82rem;color:var(--gold-light);font-weight:600;letter-spacing:0.05em;
    text-decoration:none;font-family:'DM Sans',sans-serif;}
  .phone-link:hover{color:var(--gold);}
  .lead-curso{font-size:0.8rem;color:var(--white-dim);margin-bottom:8px;font-style:italic;}
  .lead-tags{display:flex;flex-wrap:wrap;gap:6px;margin-bottom:10px;}
  .tag{font-size:0.65rem;letter-spacing:0.08em;padding:2px 8px;background:var(--dark-4);
    color:var(--white-dim);text-transform:uppercase;}
  .lead-action{font-size:0.78rem;color:var(--gold-light);padding:8px 12px;
    border:1px solid var(--dark-4);background:var(--dark-3);margin-top:8px;}
  .lead-action strong{color:var(--gold);}
  .score-block{text-align:center;min-width:64px;}
  .score-ring{width:56px;height:56px;border-radius:50%;display:flex;align-items:center;
    justify-content:center;font-family:'Playfair Display',serif;font-size:1.1rem;
    font-weight:700;margin:0 auto 4px;border:2px solid;}
  .score-ring.high{border-color:var(--hot);color:var(--hot);}
  .score-ring.mid{border-color:var(--warm);color:var(--warm);}
  .score-ring.low{border-color:var(--cold);color:var(--cold);}
  .score-label{font-size:0.6rem;letter-spacing:0.1em;text-transform:uppercase;color:var(--white-dim);}
  .msg-box{background:var(--dark-3);border-left:2px solid var(--gold);padding:12px 16px;
    font-size:0.8rem;color:var(--white-dim);margin-top:10px;font-style:italic;line-height:1.5;}
  .msg-label{font-size:0.6rem;letter-spacing:0.15em;text-transform:uppercase;color:var(--gold);
    font-style:normal;font-weight:600;margin-bottom:5px;}
  .insights-grid{display:grid;grid-template-columns:1fr 1fr;gap:3px;margin-bottom:48px;}
  .insight-card{background:var(--dark-2);padding:20px;}
  .insight-card h4{font-size:0.65rem;letter-spacing:0.18em;text-transform:uppercase;color:var(--gold);margin-bottom:12px;}
  .insight-card ul{list-style:none;display:flex;flex-direction:column;gap:6px;}
  .insight-card ul li{font-size:0.8rem;color:var(--white-dim);padding-left:14px;position:relative;}
  .insight-card ul li::before{content:'--';position:absolute;left:0;color:var(--gold);font-size:0.7rem;}
  .guiones{margin-bottom:48px;display:flex;flex-direction:column;gap:3px;}
  .guion-card{background:var(--dark-2);padding:20px 24px;}
  .guion-tipo{font-size:0.62rem;letter-spacing:0.18em;text-transform:uppercase;margin-bottom:10px;font-weight:600;}
  .guion-tipo.hot{color:var(--hot);} .guion-tipo.warm{color:var(--warm);} .guion-tipo.cold{color:var(--cold);}
  .guion-text{font-size:0.83rem;color:var(--white);line-height:1.6;font-style:italic;
    border-left:2px solid var(--dark-4);padding-left:14px;}
  .preguntas-grid{display:grid;grid-template-columns:repeat(2,1fr);gap:3px;margin-bottom:48px;}
  .pregunta-item{background:var(--dark-2);padding:14px 18px;font-size:0.8rem;color:var(--white-dim);
    display:flex;align-items:flex-start;gap:10px;}
  .pregunta-item::before{content:attr(data-n);font-family:'Playfair Display',serif;font-size:1rem;
    color:var(--gold);flex-shrink:0;line-height:1.3;}
  .footer{border-top:1px solid var(--dark-4);padding-top:20px;display:flex;
    justify-content:space-between;align-items:center;}
  .footer-brand{font-family:'Playfair Display',serif;font-size:0.9rem;color:var(--gold);}
  .footer-note{font-size:0.68rem;color:var(--p3);text-align:right;}
  .urgencia{font-size:0.6rem;letter-spacing:0.1em;text-transform:uppercase;padding:2px 7px;
    background:var(--dark-4);color:var(--white-dim);}
  .raw-md{background:var(--dark-2);padding:24px;color:var(--white-dim);font-size:0.82rem;
    white-space:pre-wrap;line-height:1.7;}
"#;
