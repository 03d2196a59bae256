//! Bundle id resolution
//!
//! A bundle id is derived from the file's location below the base directory,
//! so moving or renaming a file gives it a new identity.
//!
//! Every parent directory contributes its name followed by a separator
//! (`.` for `java`, `-` otherwise), and the file name is appended directly:
//!
//! | type   | base-relative path           | bundle id                  |
//! |--------|------------------------------|----------------------------|
//! | `java` | `com/example/Messages.properties` | `com.example.Messages` |
//! | `java` | `Messages.properties`        | `Messages`                 |
//! | `json` | `web/app/en strings.json`    | `web-app-en_strings.json`  |

use crate::domain::ResourceFile;

/// Resource type whose ids follow Java package naming
pub const JAVA_TYPE: &str = "java";

/// Derive the bundle id of `file` for the given resource type
pub fn bundle_id(resource_type: &str, file: &ResourceFile) -> String {
    let is_java = resource_type == JAVA_TYPE;
    let separator = if is_java { '.' } else { '-' };

    let mut id = String::new();
    for segment in file.dir_segments() {
        id.push_str(segment);
        id.push(separator);
    }

    let file_name = file.file_name().replace(' ', "_");
    if is_java {
        // Everything from the first dot on is an extension (Messages.properties, x.tar.gz)
        let stem = file_name
            .find('.')
            .map_or(file_name.as_str(), |idx| &file_name[..idx]);
        id.push_str(stem);
    } else {
        id.push_str(&file_name);
    }
    id
}
