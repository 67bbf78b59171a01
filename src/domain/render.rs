//! Rendering tags into a sitemap document

use super::tags::{AlternateTag, ImageTag, Tag, UrlTag};
use crate::error::{Result, SitemapError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XHTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";
pub const IMAGE_NAMESPACE: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// Date format used for `<lastmod>`
pub const LASTMOD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Turns an ordered list of tags into a document
pub trait Renderer {
    fn render(&self, tags: &[&Tag]) -> Result<String>;
}

/// Renders a `<urlset>` document
#[derive(Debug, Clone)]
pub struct XmlRenderer {
    pub indent: usize,
}

impl Default for XmlRenderer {
    fn default() -> Self {
        XmlRenderer { indent: 4 }
    }
}

type XmlWriter = Writer<Vec<u8>>;

impl Renderer for XmlRenderer {
    fn render(&self, tags: &[&Tag]) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', self.indent);

        write(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        write(
            &mut writer,
            Event::Start(BytesStart::new("urlset").with_attributes([
                ("xmlns", SITEMAP_NAMESPACE),
                ("xmlns:xhtml", XHTML_NAMESPACE),
                ("xmlns:image", IMAGE_NAMESPACE),
            ])),
        )?;

        for tag in tags {
            match tag {
                Tag::Url(url) => write_url(&mut writer, url)?,
                Tag::Alternate(alternate) => write_alternate(&mut writer, alternate)?,
                Tag::Image(image) => write_image(&mut writer, image)?,
            }
        }

        write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

        let mut output = String::from_utf8(writer.into_inner())
            .map_err(|e| SitemapError::Render(format!("Output is not UTF-8: {}", e)))?;
        output.push('\n');
        Ok(output)
    }
}

fn write(writer: &mut XmlWriter, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Render(e.to_string()))
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write_url(writer: &mut XmlWriter, url: &UrlTag) -> Result<()> {
    write(writer, Event::Start(BytesStart::new("url")))?;
    write_text_element(writer, "loc", &url.url)?;

    for alternate in &url.alternates {
        write_alternate(writer, alternate)?;
    }

    if let Some(last_modified) = url.last_modified {
        let formatted = last_modified.format(LASTMOD_FORMAT).to_string();
        write_text_element(writer, "lastmod", &formatted)?;
    }
    if let Some(change_frequency) = url.change_frequency {
        write_text_element(writer, "changefreq", change_frequency.as_str())?;
    }
    if let Some(priority) = url.priority {
        write_text_element(writer, "priority", &format!("{:.1}", priority))?;
    }

    for image in &url.images {
        write_image(writer, image)?;
    }

    write(writer, Event::End(BytesEnd::new("url")))
}

fn write_alternate(writer: &mut XmlWriter, alternate: &AlternateTag) -> Result<()> {
    write(
        writer,
        Event::Empty(BytesStart::new("xhtml:link").with_attributes([
            ("rel", "alternate"),
            ("hreflang", alternate.locale.as_str()),
            ("href", alternate.url.as_str()),
        ])),
    )
}

fn write_image(writer: &mut XmlWriter, image: &ImageTag) -> Result<()> {
    write(writer, Event::Start(BytesStart::new("image:image")))?;
    write_text_element(writer, "image:loc", &image.url)?;

    let optional = [
        ("image:caption", &image.caption),
        ("image:geo_location", &image.geo_location),
        ("image:title", &image.title),
        ("image:license", &image.license),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            write_text_element(writer, name, value)?;
        }
    }

    write(writer, Event::End(BytesEnd::new("image:image")))
}
