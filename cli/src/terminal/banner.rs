use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
  _      _    _   _   _        _    _____    _    ____  _   _ ____
 | |    / \  | \ | | | |      / \  |__  /   / \  |  _ \| | | / ___|
 | |   / _ \ |  \| | | |     / _ \   / /   / _ \ | |_) | | | \___ \
 | |__/ ___ \| |\  | | |___ / ___ \ / /_  / ___ \|  _ <| |_| |___) |
 |_____/   \_\_| \_| |_____/_/   \_\____|/_/   \_\_| \_\\___/|____/
"#;

pub fn show() {
    print::print(&format!("{}", BANNER.green().bold()));
    print::centerln(&format!("{}", "Dead Network Revival Toolkit".red().bold()));
}
