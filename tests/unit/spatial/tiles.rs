//! Tests for the tile dictionary

#[cfg(test)]
mod tests {
    use tilecollapse::spatial::tiles::{Dictionary, TileId};

    // Tests symbols are deduplicated and sorted regardless of input order
    #[test]
    fn test_dictionary_is_sorted_and_unique() {
        let dictionary = Dictionary::from_symbols("CABBAC".chars());
        assert_eq!(dictionary.symbols(), &['A', 'B', 'C']);
        assert_eq!(dictionary.len(), 3);
        assert!(!dictionary.is_empty());
    }

    // Tests ids and symbols map both ways
    #[test]
    fn test_dictionary_lookup() {
        let dictionary = Dictionary::from_symbols(['~', '#', '.']);
        for id in dictionary.ids() {
            let symbol = dictionary.symbol(id).expect("id in range");
            assert_eq!(dictionary.id_of(symbol), Some(id));
            assert!(dictionary.contains(symbol));
        }
        assert_eq!(dictionary.id_of('#'), Some(TileId(0)));
        assert_eq!(dictionary.id_of('x'), None);
        assert_eq!(dictionary.symbol(TileId(3)), None);
        assert!(!dictionary.contains('x'));
    }

    #[test]
    fn test_empty_dictionary() {
        let dictionary = Dictionary::from_symbols(std::iter::empty());
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.ids().count(), 0);
    }

    #[test]
    fn test_tile_id_display() {
        assert_eq!(TileId(4).to_string(), "#4");
        assert_eq!(TileId(4).index(), 4);
    }
}
