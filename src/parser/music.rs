//! Playlist scripts

use super::xml::parse_document;
use super::Node;
use crate::error::ScriptError;

/// One track of a playlist
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MusicDefinition {
    pub name: String,
    pub file: String,
}

/// A named, ordered list of tracks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaylistDefinition {
    pub name: String,
    pub musics: Vec<MusicDefinition>,
}

impl PlaylistDefinition {
    fn from_node(node: &Node) -> Self {
        let mut def = Self::default();
        for item in &node.children {
            match item.name.as_str() {
                "name" => def.name = item.text.clone(),
                "music" => def.musics.push(MusicDefinition::from_node(item)),
                _ => {}
            }
        }
        def
    }
}

impl MusicDefinition {
    fn from_node(node: &Node) -> Self {
        let mut def = Self::default();
        for item in &node.children {
            match item.name.as_str() {
                "name" => def.name = item.text.clone(),
                "file" => def.file = item.text.clone(),
                _ => {}
            }
        }
        def
    }
}

/// Parse every `<playlist>` element of a playlist script
pub fn parse_playlists(source: &str) -> Result<Vec<PlaylistDefinition>, ScriptError> {
    let doc = parse_document(source)?;
    Ok(doc
        .descendants("playlist")
        .into_iter()
        .map(PlaylistDefinition::from_node)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_playlist() {
        let source = r#"
<playlists>
  <playlist>
    <name>menu</name>
    <music><name>intro</name><file>music/intro.ogg</file></music>
    <music><name>loop</name><file>music/loop.ogg</file></music>
  </playlist>
</playlists>"#;
        let defs = parse_playlists(source).unwrap();
        assert_eq!(
            defs,
            vec![PlaylistDefinition {
                name: "menu".to_string(),
                musics: vec![
                    MusicDefinition {
                        name: "intro".to_string(),
                        file: "music/intro.ogg".to_string(),
                    },
                    MusicDefinition {
                        name: "loop".to_string(),
                        file: "music/loop.ogg".to_string(),
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_empty_playlist() {
        let defs = parse_playlists("<playlist><name>silence</name></playlist>").unwrap();
        assert_eq!(defs[0].name, "silence");
        assert!(defs[0].musics.is_empty());
    }

    #[test]
    fn test_malformed_script() {
        assert!(parse_playlists("<playlist><name>x</playlist>").is_err());
    }
}
