use crate::shared::error::CweTreeError;
use crate::shared::Result;
use crate::taxonomy::domain::{RawWeakness, RelatedWeakness};
use roxmltree::{Document, Node};

const WEAKNESS_TAG: &str = "Weakness";
const RELATED_WEAKNESSES_TAG: &str = "Related_Weaknesses";
const RELATED_WEAKNESS_TAG: &str = "Related_Weakness";

/// CatalogParser reads `Weakness` elements out of a CWE view document
///
/// Only the fields the tree needs are read: `ID`, `Name`, and the
/// `CWE_ID`/`Nature` pairs of `Related_Weaknesses`. Everything else in the
/// schema is ignored.
pub struct CatalogParser<'a> {
    namespace: &'a str,
}

impl<'a> CatalogParser<'a> {
    pub fn new(namespace: &'a str) -> Self {
        Self { namespace }
    }

    /// Parses all weaknesses of the document, in document order
    ///
    /// # Errors
    /// Returns `CweTreeError::XmlParseError` if the document is not well-formed
    /// or a weakness lacks its `ID` or `Name` attribute
    pub fn parse(&self, view_id: &str, xml: &str) -> Result<Vec<RawWeakness>> {
        let document = Document::parse(xml).map_err(|e| CweTreeError::XmlParseError {
            view_id: view_id.to_string(),
            details: e.to_string(),
        })?;

        let weaknesses = document
            .descendants()
            .filter(|node| node.has_tag_name((self.namespace, WEAKNESS_TAG)))
            .map(|node| self.parse_weakness(view_id, node))
            .collect::<Result<Vec<_>>>()?;

        if weaknesses.is_empty() {
            tracing::warn!(
                view_id,
                namespace = self.namespace,
                "no Weakness elements found; check the schema namespace"
            );
        }

        Ok(weaknesses)
    }

    fn parse_weakness(&self, view_id: &str, node: Node<'_, '_>) -> Result<RawWeakness> {
        let id = Self::required_attribute(view_id, node, "ID")?;
        let name = Self::required_attribute(view_id, node, "Name")?;

        let related = node
            .children()
            .find(|child| child.has_tag_name((self.namespace, RELATED_WEAKNESSES_TAG)))
            .map(|list| self.parse_related(id, list));

        Ok(RawWeakness::new(id, name, related))
    }

    fn parse_related(&self, weakness_id: &str, list: Node<'_, '_>) -> Vec<RelatedWeakness> {
        list.children()
            .filter(|child| child.has_tag_name((self.namespace, RELATED_WEAKNESS_TAG)))
            .filter_map(|entry| {
                match (entry.attribute("CWE_ID"), entry.attribute("Nature")) {
                    (Some(cwe_id), Some(nature)) => Some(RelatedWeakness::new(cwe_id, nature)),
                    _ => {
                        tracing::debug!(
                            weakness_id,
                            "skipping Related_Weakness without CWE_ID or Nature"
                        );
                        None
                    }
                }
            })
            .collect()
    }

    fn required_attribute<'n>(
        view_id: &str,
        node: Node<'n, '_>,
        attribute: &str,
    ) -> Result<&'n str> {
        node.attribute(attribute).ok_or_else(|| {
            let position = node.document().text_pos_at(node.range().start);
            CweTreeError::XmlParseError {
                view_id: view_id.to_string(),
                details: format!(
                    "Weakness element at {} has no {} attribute",
                    position, attribute
                ),
            }
            .into()
        })
    }
}
