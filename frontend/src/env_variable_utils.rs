use web_sys::window;

pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

// Build-time values are baked in by `OMDB_API_KEY=... trunk build`.
fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "OMDB_API_KEY" => option_env!("OMDB_API_KEY"),
        "OMDB_API_URL" => option_env!("OMDB_API_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

pub fn get_api_key() -> Option<String> {
    get_env_var("OMDB_API_KEY").or_else(|| build_time_var("OMDB_API_KEY"))
}

pub fn get_api_base_url() -> Option<String> {
    get_env_var("OMDB_API_URL").or_else(|| build_time_var("OMDB_API_URL"))
}

pub fn get_app_name() -> Option<String> {
    get_env_var("APP_NAME")
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
