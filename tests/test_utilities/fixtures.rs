use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const NAMESPACE: &str = "http://cwe.mitre.org/cwe-6";

/// A weakness as `(id, name, ChildOf parent ids)`
pub type WeaknessFixture<'a> = (&'a str, &'a str, &'a [&'a str]);

/// Renders a minimal CWE catalog document for the given weaknesses
pub fn catalog_xml(view_id: &str, weaknesses: &[WeaknessFixture<'_>]) -> String {
    let mut body = String::new();
    for (id, name, parents) in weaknesses {
        body.push_str(&format!(
            "    <Weakness ID=\"{}\" Name=\"{}\" Abstraction=\"Base\" Status=\"Stable\">\n",
            id, name
        ));
        body.push_str("      <Description>fixture</Description>\n");
        if !parents.is_empty() {
            body.push_str("      <Related_Weaknesses>\n");
            for parent in parents.iter() {
                body.push_str(&format!(
                    "        <Related_Weakness Nature=\"ChildOf\" CWE_ID=\"{}\" View_ID=\"{}\" Ordinal=\"Primary\"/>\n",
                    parent, view_id
                ));
            }
            body.push_str("      </Related_Weaknesses>\n");
        }
        body.push_str("    </Weakness>\n");
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Weakness_Catalog xmlns="{NAMESPACE}" Name="VIEW LIST: CWE-{view_id}" Version="4.15">
  <Weaknesses>
{body}  </Weaknesses>
</Weakness_Catalog>
"#
    )
}

/// Zips `xml` under `entry_name`
pub fn zip_bytes(entry_name: &str, xml: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file(entry_name, SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

/// Writes `<dir>/<view_id>.xml.zip` containing `<view_id>.xml`
pub fn write_view_archive(dir: &Path, view_id: &str, weaknesses: &[WeaknessFixture<'_>]) -> PathBuf {
    let path = dir.join(format!("{}.xml.zip", view_id));
    let xml = catalog_xml(view_id, weaknesses);
    std::fs::write(&path, zip_bytes(&format!("{}.xml", view_id), &xml)).unwrap();
    path
}

/// Writes archives for the three default views with small, distinct trees
pub fn write_default_archives(dir: &Path) {
    write_view_archive(
        dir,
        "699",
        &[
            ("1", "Category Root", &[]),
            ("20", "Improper Input Validation", &["1"]),
            ("79", "Cross-site Scripting", &["20"]),
        ],
    );
    write_view_archive(
        dir,
        "1000",
        &[
            ("664", "Improper Control of a Resource", &[]),
            ("707", "Improper Neutralization", &[]),
            ("74", "Injection", &["707", "664"]),
        ],
    );
    write_view_archive(
        dir,
        "1008",
        &[("1010", "Authenticate Actors", &[]), ("287", "Improper Authentication", &["1010"])],
    );
}
