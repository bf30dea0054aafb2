use crate::content::{Block, Content};

pub const WORDS_PER_MINUTE: usize = 200;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in minutes, never less than one.
pub fn read_time(content: &Content) -> u32 {
    let words = match content {
        Content::Plain(text) => word_count(text),
        Content::Blocks(blocks) => {
            let text = blocks.iter()
                .filter(|block| block.is_paragraph())
                .flat_map(Block::text_children)
                .collect::<Vec<_>>()
                .join(" ");
            word_count(&text)
        }
        Content::Unsupported => 0,
    };
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    #[test]
    fn test_empty_is_one_minute() {
        assert_eq!(read_time(&Content::Plain("".to_string())), 1);
        assert_eq!(read_time(&Content::Plain("   \n\t".to_string())), 1);
        assert_eq!(read_time(&Content::Blocks(vec![])), 1);
        assert_eq!(read_time(&Content::Unsupported), 1);
    }

    #[test]
    fn test_plain_rounds_up() {
        assert_eq!(read_time(&Content::Plain(words(200))), 1);
        assert_eq!(read_time(&Content::Plain(words(201))), 2);
        assert_eq!(read_time(&Content::Plain(words(400))), 2);
        assert_eq!(read_time(&Content::Plain(words(401))), 3);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(word_count("one   two\n\nthree\tfour "), 4);
    }

    #[test]
    fn test_blocks() {
        let first = words(120);
        let second = words(80);
        let blocks = Content::Blocks(vec![
            Block::paragraph(&[first.as_str()]),
            Block { kind: "heading".to_string(), children: vec![] },
            Block::paragraph(&[second.as_str()]),
        ]);
        assert_eq!(read_time(&blocks), 1);

        // Paragraphs are joined with a space, so the last and first words do not merge
        let third = words(1);
        let blocks = Content::Blocks(vec![
            Block::paragraph(&[first.as_str()]),
            Block::paragraph(&[second.as_str()]),
            Block::paragraph(&[third.as_str()]),
        ]);
        assert_eq!(read_time(&blocks), 2);
    }

    #[test]
    fn test_words_split_across_children() {
        let children = vec!["word"; 400];
        let blocks = Content::Blocks(vec![Block::paragraph(&children)]);
        assert_eq!(read_time(&blocks), 2);

        let blocks = Content::Blocks(vec![
            Block::paragraph(&children),
            Block::paragraph(&["word"]),
        ]);
        assert_eq!(read_time(&blocks), 3);
    }
}
