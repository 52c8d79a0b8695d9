/// Turn off ANSI colors when `NO_COLOR` is set
pub fn init_color() {
    if std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}
