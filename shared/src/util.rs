/// Format a timestamp for order display (local time, `DD/MM/YYYY HH:MM`)
pub fn display_date(ts: chrono::DateTime<chrono::Local>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}

/// Current local time formatted for order display
pub fn display_now() -> String {
    display_date(chrono::Local::now())
}
