use grocer_core::AppConfig;

pub fn run(config: &AppConfig) -> String {
    let mut lines =
        vec!["effective config (source precedence: flags > env > file > default):".to_string()];

    lines.push(render_line(
        "catalog.base_url",
        &config.catalog.base_url,
        "GROCER_CATALOG_BASE_URL",
    ));
    lines.push(render_line(
        "catalog.timeout_secs",
        &config.catalog.timeout_secs.to_string(),
        "GROCER_CATALOG_TIMEOUT_SECS",
    ));
    lines.push(render_line(
        "catalog.cache_ttl_secs",
        &config.catalog.cache_ttl_secs.to_string(),
        "GROCER_CATALOG_CACHE_TTL_SECS",
    ));
    lines.push(render_line("logging.level", &config.logging.level, "GROCER_LOGGING_LEVEL"));
    lines.push(render_line(
        "logging.format",
        &format!("{:?}", config.logging.format).to_lowercase(),
        "GROCER_LOGGING_FORMAT",
    ));

    lines.join("\n")
}

fn render_line(field: &str, value: &str, env_var: &str) -> String {
    format!("  {field} = {value}  (env {env_var})")
}
