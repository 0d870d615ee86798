/// Folders every project keeps under `Assets`, in the order they are reported.
pub const ASSET_FOLDERS: &[&str] = &[
    "Assets/Art",
    "Assets/Audio",
    "Assets/Prefabs",
    "Assets/Scenes",
    "Assets/Scripts",
    "Assets/ScriptableObjects",
    "Assets/Materials",
    "Assets/Settings",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_folder_lives_under_assets() {
        let prefix = "Assets/";
        for folder in ASSET_FOLDERS {
            assert!(folder.starts_with(prefix), "{folder} is outside Assets");
            assert!(folder.len() > prefix.len(), "{folder} names no subfolder");
        }
    }

    #[test]
    fn folders_are_unique() {
        let unique: HashSet<_> = ASSET_FOLDERS.iter().collect();
        assert_eq!(unique.len(), ASSET_FOLDERS.len());
    }

    #[test]
    fn declaration_order_is_stable() {
        assert_eq!(ASSET_FOLDERS.first(), Some(&"Assets/Art"));
        assert_eq!(ASSET_FOLDERS.last(), Some(&"Assets/Settings"));
        assert_eq!(ASSET_FOLDERS.len(), 8);
    }
}
