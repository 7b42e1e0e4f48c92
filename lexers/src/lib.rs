mod scanner;
mod helpers;

pub use scanner::Scanner;

pub use helpers::scan_integer;
pub use helpers::scan_quoted_string;
pub use helpers::scan_word;
pub use helpers::skip_whitespace;
