//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Kiln Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Kiln"
# width = 1280           # 64-16384
# height = 720           # 64-16384
# vsync = true
# clear_color = "#101418"

[renderer]
# max_quads = 10000      # 1-1000000, quads per batch
# projection = "pixels"  # pixels (origin bottom-left), centered

[font]
# atlas = "assets/font.png"   # grid atlas; text is skipped when unset
# columns = 16           # 1-64
# rows = 16              # 1-64
# first_char = 0         # code point in the first cell
# glyph_width = 16.0     # 1.0-512.0
# glyph_height = 16.0    # 1.0-512.0
# tracking = 0.0

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
