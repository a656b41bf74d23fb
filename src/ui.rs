use crate::achievements::{Achievement, AchievementsResponse};
use crate::chart::BarChart;
use crate::clock::{format_clock, format_long_date, CLOCK_TICK_MS};
use crate::form::Confirmation;
use crate::models::{
    ChatMessage, CravingLevel, LogEntry, Mood, NicotineProduct, UsageComparison,
};
use crate::progress::{format_dollars, ProgressReport};
use crate::stats::StatsResponse;
use crate::theme::{Theme, ThemeMode};
use crate::validation::LogDraft;
use chrono::{Datelike, NaiveDateTime};
use std::fmt::Write;

const DAILY_QUOTES: &[&str] = &[
    "Recovery is not one big step. It's lots of little steps.",
    "Every small step forward is a victory worth celebrating.",
    "The courage to begin is often the hardest part, and you've already taken it.",
    "Progress, not perfection, is the goal of your journey.",
    "Each day you choose health, you're choosing your future self.",
];

const NAV_ITEMS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/insights", "Insights"),
    ("/log", "Log"),
    ("/community", "Community"),
    ("/achievements", "Achievements"),
];

pub struct PageContext {
    pub theme: ThemeMode,
    pub now: NaiveDateTime,
    pub path: &'static str,
}

impl PageContext {
    pub fn new(theme: ThemeMode, now: NaiveDateTime, path: &'static str) -> Self {
        Self { theme, now, path }
    }
}

pub fn render_dashboard(
    ctx: &PageContext,
    stats: &StatsResponse,
    progress: &ProgressReport,
    today: &[LogEntry],
) -> String {
    let summary = &stats.summary;
    let status = if today.is_empty() {
        "You haven't logged today yet.".to_string()
    } else if summary.today_mg == 0.0 {
        "No nicotine logged today. Keep it going!".to_string()
    } else {
        match summary.change_pct {
            Some(pct) if pct < 0.0 => format!(
                "You've used {} today, down {}% from your average.",
                format_mg(summary.today_mg),
                -pct
            ),
            Some(pct) if pct > 0.0 => format!(
                "You've used {} today, up {}% from your average.",
                format_mg(summary.today_mg),
                pct
            ),
            _ => format!("You've used {} today.", format_mg(summary.today_mg)),
        }
    };

    let action = if today.is_empty() {
        r#"<a class="btn" href="/log">Log Today's Use</a>"#.to_string()
    } else {
        format!(
            r#"<a class="btn secondary" href="/log">Logged today ({}) &middot; add another</a>"#,
            today.len()
        )
    };

    let quote = DAILY_QUOTES[ctx.now.date().ordinal0() as usize % DAILY_QUOTES.len()];

    let body = format!(
        r#"<section class="card">
  <h2>Today's Status</h2>
  <p class="lead">{status}</p>
  <div class="row"><span class="label">Reduction Progress</span>{dots}</div>
  {action}
</section>
<section class="grid">
  {streak}
  {logged}
  {today_mg}
  {average}
</section>
<section class="card">
  <h2>Your Progress</h2>
  <div class="grid">
    {goal}
    {avoided}
    {saved}
    {regained}
  </div>
  <form class="goal" method="post" action="/goal">
    <label class="label" for="quit-date">Quit date</label>
    <input type="date" id="quit-date" name="quit_date" value="{quit_date}" />
    <button class="btn secondary" type="submit">{goal_action}</button>
  </form>
</section>
<section class="card quote">
  <h3>Daily Inspiration</h3>
  <blockquote>"{quote}"</blockquote>
</section>"#,
        dots = render_dots(&summary.progress_dots),
        streak = stat_card("Current Streak", &format!("{} days", summary.current_streak)),
        logged = stat_card("Days Logged", &summary.logged_days.to_string()),
        today_mg = stat_card("Today's Intake", &format_mg(summary.today_mg)),
        average = stat_card(
            "Recent Average",
            &summary.average_mg.map(format_mg).unwrap_or_else(|| "--".to_string()),
        ),
        goal = stat_card(
            "Days to 0mg",
            &progress
                .days_to_goal
                .map(|days| format!("{days} days left"))
                .unwrap_or_else(|| "Set a quit date".to_string()),
        ),
        avoided = stat_card(
            "Cigarettes Avoided",
            &progress.cigarettes_avoided.to_string(),
        ),
        saved = stat_card("Money Saved", &progress.money_saved),
        regained = stat_card("Life Regained", &progress.life_regained),
        quit_date = progress.quit_date.as_deref().unwrap_or(""),
        goal_action = if progress.quit_date.is_some() {
            "Change Goal"
        } else {
            "Set Goal"
        },
    );

    layout(ctx, "NicotineFree", &body, "")
}

pub fn render_log_form(ctx: &PageContext, draft: &LogDraft, yesterday_mg: Option<f64>) -> String {
    let mut body = String::new();
    let yesterday = yesterday_mg
        .map(format_mg)
        .unwrap_or_else(|| "Not logged".to_string());
    let _ = write!(
        body,
        r#"<section class="card">
  <h2>Log Today's Use</h2>
  <p class="muted">{date}</p>
  <div class="row"><span>Yesterday's use:</span><strong class="accent">{yesterday}</strong></div>
  <form id="log-form" method="post" action="/log">"#,
        date = format_long_date(ctx.now.date()),
    );

    let comparisons: Vec<(&str, &str, &str)> = UsageComparison::ALL
        .iter()
        .map(|c| (c.as_str(), c.label(), c.description()))
        .collect();
    body.push_str(&choice_group(
        "usage_comparison",
        "Compared to yesterday, did you:",
        false,
        &comparisons,
        draft.usage_comparison.map(UsageComparison::as_str),
    ));

    let moods: Vec<(&str, &str, &str)> = Mood::ALL
        .iter()
        .map(|m| (m.as_str(), m.label(), m.emoji()))
        .collect();
    body.push_str(&choice_group(
        "mood",
        "How are you feeling?",
        true,
        &moods,
        draft.mood.map(Mood::as_str),
    ));

    let cravings: Vec<(&str, &str, &str)> = CravingLevel::ALL
        .iter()
        .map(|c| (c.as_str(), c.label(), ""))
        .collect();
    body.push_str(&choice_group(
        "craving_level",
        "Craving Level",
        true,
        &cravings,
        draft.craving_level.map(CravingLevel::as_str),
    ));

    let mut products: Vec<(&str, &str, &str)> = vec![("", "Nothing", "No nicotine today")];
    products.extend(
        NicotineProduct::ALL
            .iter()
            .map(|p| (p.as_str(), p.label(), p.description())),
    );
    body.push_str(&choice_group(
        "nicotine_product",
        "What did you use? (Optional)",
        false,
        &products,
        Some(draft.nicotine_product.map(NicotineProduct::as_str).unwrap_or("")),
    ));

    let marker = if draft.amount_required() {
        r#"<span class="required">*</span>"#
    } else {
        r#"<span class="muted">(Optional)</span>"#
    };
    let message = draft
        .validation_message()
        .map(|m| format!(r#"<p class="error">{}</p>"#, escape_html(&m)))
        .unwrap_or_default();
    let disabled = if draft.is_valid() { "" } else { " disabled" };

    let _ = write!(
        body,
        r#"
    <fieldset>
      <legend>Nicotine Amount <span id="amount-marker">{marker}</span></legend>
      <input type="text" name="nicotine_amount" id="nicotine-amount" value="{amount}" placeholder="{placeholder}" />
      <p class="muted small">Enter the nicotine strength (e.g., 6mg, 12mg)</p>
    </fieldset>
    <fieldset>
      <legend>Quick Note (Optional)</legend>
      <textarea name="note" rows="3" placeholder="How was your day? Any thoughts or reflections...">{note}</textarea>
    </fieldset>
    <div id="validation-message">{message}</div>
    <div class="actions">
      <a class="btn secondary" href="/">Cancel</a>
      <button class="btn" id="save-btn" type="submit"{disabled}>Save</button>
    </div>
  </form>
</section>"#,
        amount = escape_html(&draft.nicotine_amount),
        placeholder = draft.amount_placeholder(),
        note = escape_html(&draft.note),
    );
    body.push_str(LOG_FORM_SCRIPT);

    layout(ctx, "Log Today's Use", &body, "")
}

pub fn render_confirmation(ctx: &PageContext, confirmation: &Confirmation) -> String {
    let delay_ms = confirmation.closes_after.as_millis();
    // meta refresh only takes whole seconds; never fire before the script does
    let head = format!(
        r#"<meta http-equiv="refresh" content="{};url=/" />"#,
        delay_ms.div_ceil(1000).max(1)
    );
    let body = format!(
        r#"<section class="card center">
  <h2>AI Analysis</h2>
  <p class="lead">{message}</p>
  <p class="muted small">Saved. Returning home shortly.</p>
</section>
<script>setTimeout(() => window.location.assign('/'), {delay_ms});</script>"#,
        message = escape_html(confirmation.message),
    );
    layout(ctx, "Saved", &body, &head)
}

pub fn render_insights(
    ctx: &PageContext,
    stats: &StatsResponse,
    progress: &ProgressReport,
) -> String {
    let summary = &stats.summary;
    let body = format!(
        r#"<section class="grid">
  {streak}
  {today}
  {average}
  {logged}
</section>
<section class="card">
  <h2>Progress Trends</h2>
  {craving}
  {mood}
  {intake}
</section>
<section class="card">
  <h2>Time Smoke-Free</h2>
  <p class="lead accent">{time_smoke_free}</p>
  <h3>Health Improvements</h3>
  <p class="muted">{health_status}</p>
  <ul class="timeline">{timeline}</ul>
</section>
<section class="card">
  <h2>Money Saved</h2>
  <p class="lead accent">{money_saved}</p>
  {per_day}
  {per_week}
  {per_month}
  {per_year}
</section>"#,
        streak = stat_card("Current Streak", &format!("{} days", summary.current_streak)),
        today = stat_card("Today's Intake", &format_mg(summary.today_mg)),
        average = stat_card(
            "Recent Average",
            &summary.average_mg.map(format_mg).unwrap_or_else(|| "--".to_string()),
        ),
        logged = stat_card("Days Logged", &summary.logged_days.to_string()),
        craving = render_chart("Craving Intensity", "7 days", &stats.craving_chart),
        mood = render_chart("Mood Level", "7 days", &stats.mood_chart),
        intake = render_chart("Nicotine Intake (mg)", "7 days", &stats.intake_chart),
        time_smoke_free = escape_html(&progress.time_smoke_free),
        health_status = progress.health_status,
        timeline = render_timeline(progress),
        money_saved = escape_html(&progress.money_saved),
        per_day = savings_row("Per day", progress.savings.per_day_cents),
        per_week = savings_row("Per week", progress.savings.per_week_cents),
        per_month = savings_row("Per month", progress.savings.per_month_cents),
        per_year = savings_row("Per year", progress.savings.per_year_cents),
    );
    layout(ctx, "Your Insights", &body, "")
}

pub fn render_achievements(ctx: &PageContext, response: &AchievementsResponse) -> String {
    let (earned, locked): (Vec<&Achievement>, Vec<&Achievement>) =
        response.achievements.iter().partition(|a| a.earned);

    let mut body = format!(
        r#"<section class="card center">
  <h2>{} of {} Earned</h2>
  <p class="muted">Keep going to unlock more achievements and celebrate your progress!</p>
</section>"#,
        response.earned_count, response.total
    );

    if !earned.is_empty() {
        body.push_str(r#"<h2 class="section">Earned Achievements</h2>"#);
        for achievement in earned {
            body.push_str(&achievement_card(achievement));
        }
    }
    if !locked.is_empty() {
        body.push_str(r#"<h2 class="section">Upcoming Achievements</h2>"#);
        for achievement in locked {
            body.push_str(&achievement_card(achievement));
        }
    }

    layout(ctx, "Achievements", &body, "")
}

pub fn render_community(ctx: &PageContext, messages: &[ChatMessage], error: Option<&str>) -> String {
    let mut body = String::from(
        r#"<section class="card">
  <h2>Welcome to Support</h2>
  <p class="muted">Share your journey with others who understand.</p>
</section>"#,
    );

    if messages.is_empty() {
        body.push_str(r#"<p class="muted center">No messages yet. Say hello!</p>"#);
    }
    for message in messages {
        let _ = write!(
            body,
            r#"<article class="message{own}">
  <header><strong>{username}</strong><span class="muted small">{timestamp}</span></header>
  <p>{text}</p>
  <form method="post" action="/community/{id}/like"><button class="like" type="submit">&#9829; {likes}</button></form>
</article>"#,
            own = if message.own { " own" } else { "" },
            username = escape_html(&message.username),
            timestamp = escape_html(&message.timestamp),
            text = escape_html(&message.message),
            id = message.id,
            likes = message.likes,
        );
    }

    let error = error
        .map(|e| format!(r#"<p class="error">{}</p>"#, escape_html(e)))
        .unwrap_or_default();
    let _ = write!(
        body,
        r#"{error}
<form class="composer" method="post" action="/community">
  <input type="text" name="message" placeholder="Share your thoughts..." />
  <button class="btn" type="submit">Send</button>
</form>"#
    );

    layout(ctx, "Community Chat", &body, "")
}

fn layout(ctx: &PageContext, title: &str, body: &str, head_extra: &str) -> String {
    let theme = Theme::for_mode(ctx.theme);
    let toggle_label = match ctx.theme {
        ThemeMode::Light => "Dark mode",
        ThemeMode::Dark => "Light mode",
    };
    let nav: String = NAV_ITEMS
        .iter()
        .map(|(href, label)| {
            let active = if *href == ctx.path { " class=\"active\"" } else { "" };
            format!(r#"<a href="{href}"{active}>{label}</a>"#)
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en" data-theme="{mode}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
  {head_extra}
  <style>{variables}{BASE_CSS}</style>
</head>
<body>
  <main class="app">
    <div class="status-bar"><span id="clock">{clock}</span></div>
    <header class="top">
      <h1>{title}</h1>
      <form method="post" action="/theme">
        <input type="hidden" name="return_to" value="{path}" />
        <button class="ghost" type="submit">{toggle_label}</button>
      </form>
    </header>
    {body}
  </main>
  <nav class="bottom">{nav}</nav>
  <script>
    const clockEl = document.getElementById('clock');
    const tick = () => {{
      const now = new Date();
      clockEl.textContent = now.toLocaleTimeString('en-GB', {{ hour: '2-digit', minute: '2-digit' }});
    }};
    const clockTimer = setInterval(tick, {CLOCK_TICK_MS});
    window.addEventListener('pagehide', () => clearInterval(clockTimer));
  </script>
</body>
</html>
"#,
        mode = ctx.theme.as_str(),
        variables = theme.css_variables(),
        clock = format_clock(ctx.now.time()),
        path = ctx.path,
    )
}

fn stat_card(label: &str, value: &str) -> String {
    format!(
        r#"<div class="stat"><span class="label">{label}</span><span class="value">{}</span></div>"#,
        escape_html(value)
    )
}

fn render_timeline(progress: &ProgressReport) -> String {
    progress
        .health
        .iter()
        .map(|milestone| {
            format!(
                r#"<li class="{state}"><strong>{after}</strong> <span class="muted">{benefit}</span></li>"#,
                state = if milestone.reached { "reached" } else { "upcoming" },
                after = milestone.after,
                benefit = milestone.benefit,
            )
        })
        .collect()
}

fn savings_row(period: &str, cents: u64) -> String {
    format!(
        r#"<div class="row"><span class="muted">{period}</span><strong>{}</strong></div>"#,
        format_dollars(cents)
    )
}

fn render_dots(dots: &[bool]) -> String {
    let inner: String = dots
        .iter()
        .map(|filled| {
            if *filled {
                r#"<span class="dot filled"></span>"#
            } else {
                r#"<span class="dot"></span>"#
            }
        })
        .collect();
    format!(r#"<span class="dots">{inner}</span>"#)
}

fn render_chart(title: &str, caption: &str, chart: &BarChart) -> String {
    if chart.is_empty() {
        return format!(r#"<div class="chart"><h3>{title}</h3><p class="muted">No data yet</p></div>"#);
    }
    let bars: String = chart
        .bars
        .iter()
        .map(|bar| {
            let label = escape_html(&bar.label);
            if !bar.logged {
                return format!(
                    r#"<div class="bar-slot" title="{label}: not logged"><div class="bar empty"></div><span class="small muted">{label}</span></div>"#
                );
            }
            format!(
                r#"<div class="bar-slot" title="{label}: {value}"><div class="bar" style="height: {height}%"></div><span class="small muted">{label}</span></div>"#,
                value = format_number(bar.value),
                height = bar.height_pct,
            )
        })
        .collect();
    format!(
        r#"<div class="chart"><div class="row"><h3>{title}</h3><span class="muted small">{caption}</span></div><div class="bars">{bars}</div></div>"#
    )
}

fn choice_group(
    name: &str,
    legend: &str,
    required: bool,
    options: &[(&str, &str, &str)],
    selected: Option<&str>,
) -> String {
    let marker = if required { r#" <span class="required">*</span>"# } else { "" };
    let mut out = format!(
        r#"
    <fieldset class="choices">
      <legend>{legend}{marker}</legend>"#
    );
    for (value, label, hint) in options {
        let checked = if selected == Some(*value) { " checked" } else { "" };
        let _ = write!(
            out,
            r#"
      <label class="choice"><input type="radio" name="{name}" value="{value}"{checked} /><span>{label}</span><small class="muted">{hint}</small></label>"#
        );
    }
    out.push_str("\n    </fieldset>");
    out
}

fn achievement_card(achievement: &Achievement) -> String {
    let status = if achievement.earned {
        "Earned".to_string()
    } else {
        format!("{}/{}", achievement.progress, achievement.target)
    };
    format!(
        r#"<article class="card achievement{locked}">
  <span class="icon">{icon}</span>
  <div><h3>{title}</h3><p class="muted">{description}</p>
  <span class="pill">{category}</span> <span class="small muted">{status}</span></div>
</article>"#,
        locked = if achievement.earned { "" } else { " locked" },
        icon = achievement.icon,
        title = achievement.title,
        description = achievement.description,
        category = achievement.category,
    )
}

pub fn format_mg(mg: f64) -> String {
    format!("{} mg", format_number(mg))
}

fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

const LOG_FORM_SCRIPT: &str = r#"
<script>
  const logForm = document.getElementById('log-form');
  const saveBtn = document.getElementById('save-btn');
  const messageEl = document.getElementById('validation-message');
  const amountEl = document.getElementById('nicotine-amount');
  const markerEl = document.getElementById('amount-marker');

  const refreshValidity = async () => {
    const fields = Object.fromEntries(new FormData(logForm).entries());
    const res = await fetch('/api/validate', {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(fields)
    });
    if (!res.ok) {
      saveBtn.disabled = true;
      return;
    }
    const result = await res.json();
    saveBtn.disabled = !result.valid;
    amountEl.placeholder = result.placeholder;
    markerEl.innerHTML = result.amount_required
      ? '<span class="required">*</span>'
      : '<span class="muted">(Optional)</span>';
    messageEl.innerHTML = '';
    if (result.message) {
      const p = document.createElement('p');
      p.className = 'error';
      p.textContent = result.message;
      messageEl.appendChild(p);
    }
  };

  logForm.addEventListener('change', () => refreshValidity().catch(() => {}));
  logForm.addEventListener('input', () => refreshValidity().catch(() => {}));
</script>
"#;

const BASE_CSS: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; background: var(--bg); color: var(--ink);
  font-family: "Inter", "Trebuchet MS", sans-serif; display: flex; flex-direction: column; align-items: center; }
.app { width: min(420px, 100%); padding: 12px 16px 96px; display: grid; gap: 16px; }
.status-bar { font-size: 0.85rem; font-weight: 600; color: var(--muted); }
.top { display: flex; align-items: center; justify-content: space-between; }
h1 { margin: 0; font-size: 1.4rem; }
h2 { margin: 0 0 8px; font-size: 1.15rem; }
h3 { margin: 0 0 4px; font-size: 1rem; }
.section { margin-top: 8px; }
.card { background: var(--surface); border: 1px solid var(--border); border-radius: 20px; padding: 18px; display: grid; gap: 10px; }
.center { text-align: center; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.stat { background: var(--surface); border: 1px solid var(--border); border-radius: 16px; padding: 14px; display: grid; gap: 6px; }
.label { font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--muted); }
.value { font-size: 1.3rem; font-weight: 700; color: var(--accent); }
.lead { font-size: 1.05rem; line-height: 1.5; }
.muted { color: var(--muted); }
.small { font-size: 0.8rem; }
.accent { color: var(--accent); }
.row { display: flex; align-items: center; justify-content: space-between; gap: 12px; }
.dots { display: inline-flex; gap: 6px; }
.dot { width: 12px; height: 12px; border-radius: 50%; background: var(--border); border: 1px solid var(--muted); }
.dot.filled { background: var(--accent); border-color: var(--accent); }
.btn { appearance: none; border: none; border-radius: 14px; padding: 12px 18px; font-weight: 600; font-size: 1rem;
  background: var(--accent); color: #fff; text-decoration: none; text-align: center; cursor: pointer; }
.btn.secondary { background: var(--accent-soft); color: var(--accent); }
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.ghost { background: transparent; border: 1px solid var(--border); color: var(--ink); border-radius: 12px; padding: 6px 10px; cursor: pointer; }
fieldset { border: none; padding: 0; margin: 0 0 12px; display: grid; gap: 8px; }
legend { font-weight: 700; margin-bottom: 8px; }
.choice { display: flex; align-items: center; gap: 10px; padding: 10px 12px; border: 2px solid var(--border); border-radius: 14px; }
.choice:has(input:checked) { border-color: var(--accent); background: var(--accent-soft); }
.choice small { margin-left: auto; }
input[type="text"], textarea { width: 100%; padding: 12px; border-radius: 14px; border: 1px solid var(--border);
  background: var(--bg); color: var(--ink); font: inherit; }
.required { color: var(--danger); }
.error { margin: 0; padding: 10px 12px; border-radius: 14px; background: var(--accent-soft); color: var(--danger); }
.actions { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
.chart { display: grid; gap: 8px; margin-bottom: 12px; }
.bars { display: flex; align-items: flex-end; gap: 6px; height: 96px; }
.bar-slot { flex: 1; height: 100%; display: flex; flex-direction: column; justify-content: flex-end; align-items: center; gap: 4px; }
.bar { width: 100%; border-radius: 8px 8px 0 0; background: var(--accent); }
.bar.empty { height: 4px; border-radius: 2px; background: transparent; border-top: 2px dashed var(--border); }
.goal { display: grid; grid-template-columns: auto 1fr auto; align-items: center; gap: 8px; }
input[type="date"] { padding: 8px; border-radius: 12px; border: 1px solid var(--border); background: var(--bg); color: var(--ink); font: inherit; }
.timeline { margin: 0; padding-left: 18px; display: grid; gap: 6px; }
.timeline .reached strong { color: var(--success); }
.quote blockquote { margin: 0; font-style: italic; color: var(--muted); }
.message { background: var(--surface); border: 1px solid var(--border); border-radius: 20px; padding: 14px; margin-right: 32px; }
.message.own { margin: 0 0 0 32px; background: var(--accent); color: #fff; }
.message header { display: flex; justify-content: space-between; }
.like { background: transparent; border: 1px solid var(--border); border-radius: 999px; padding: 2px 10px; color: inherit; cursor: pointer; }
.composer { display: flex; gap: 8px; }
.achievement { grid-template-columns: auto 1fr; align-items: center; }
.achievement.locked { opacity: 0.6; }
.icon { font-size: 2rem; }
.pill { font-size: 0.7rem; padding: 2px 8px; border-radius: 999px; background: var(--accent-soft); color: var(--accent); }
nav.bottom { position: fixed; bottom: 0; width: min(420px, 100%); display: flex; justify-content: space-around;
  background: var(--surface); border-top: 1px solid var(--border); padding: 10px 0 16px; }
nav.bottom a { color: var(--muted); text-decoration: none; font-size: 0.8rem; font-weight: 600; }
nav.bottom a.active { color: var(--accent); }
"#;
