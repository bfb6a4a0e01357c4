pub fn default_process_names() -> Vec<String> {
    vec![
        "Hauptwerk.exe".to_string(),
        "Hauptwerk (alt config 1).exe".to_string(),
        "Hauptwerk (alt config 2).exe".to_string(),
        "Hauptwerk (alt config 3).exe".to_string(),
    ]
}

pub fn dialog_title(application: &str) -> String {
    format!("{} Affinity Setting", application)
}

pub const APPLICATION: &str = "Hauptwerk";
pub const LOG_LEVEL: &str = "info";
