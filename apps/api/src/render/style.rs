use crate::render::document::Rgb;

/// Separator placed between adjacent contact tokens (U+22C4, white diamond).
pub const CONTACT_SEPARATOR: &str = " \u{22C4} ";

/// Immutable presentation settings handed to the renderer.
/// Built once from `Config` at startup; never read from ambient state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    pub font_family: String,
    pub body_size_pt: f32,
    pub name_size_pt: f32,
    pub heading_size_pt: f32,
    pub page_header_size_pt: f32,
    /// Role line size inside Professional Experience.
    pub role_size_pt: f32,
    /// Role line size inside sections with an unrecognised title.
    pub other_role_size_pt: f32,
    pub detail_indent_pt: f32,
    pub bullet_indent_pt: f32,
    pub contact_separator: String,
    pub link_color: Rgb,
    /// Emit the `"<Name> - Resume"` running header.
    pub page_header: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            font_family: "Arial".to_string(),
            body_size_pt: 11.0,
            name_size_pt: 14.0,
            heading_size_pt: 16.0,
            page_header_size_pt: 14.0,
            role_size_pt: 11.0,
            other_role_size_pt: 12.0,
            detail_indent_pt: 36.0,
            bullet_indent_pt: 18.0,
            contact_separator: CONTACT_SEPARATOR.to_string(),
            link_color: Rgb::BLUE,
            page_header: true,
        }
    }
}
