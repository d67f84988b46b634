use scoresite::plugins::{NotationPlugin, PluginDescriptor, PluginRegistry};
use speculate2::speculate;

fn finale() -> PluginDescriptor {
    PluginDescriptor {
        executable: "C:/Program Files/Finale 2011 Demo/Findemo.exe".to_string(),
        title: "Finale".to_string(),
        tip: "Invoke Finale on score XML".to_string(),
    }
}

fn write_descriptor(dir: &std::path::Path, name: &str, descriptor: &PluginDescriptor) {
    let raw = serde_json::to_string_pretty(descriptor).expect("Failed to serialize descriptor");
    std::fs::write(dir.join(name), raw).expect("Failed to write descriptor file");
}

speculate! {
    describe "descriptors" {
        it "builds the two-element argument vector verbatim" {
            let cmd = finale().command_line("C:/scores/out.xml");
            assert_eq!(
                cmd,
                vec![
                    "C:/Program Files/Finale 2011 Demo/Findemo.exe".to_string(),
                    "C:/scores/out.xml".to_string(),
                ]
            );
        }

        it "does not normalize or quote paths" {
            let cmd = finale().command_line("scores/with space/out.xml");
            assert_eq!(cmd[1], "scores/with space/out.xml");
        }

        it "is usable through the NotationPlugin seam" {
            let plugin: &dyn NotationPlugin = &finale();
            assert_eq!(plugin.title(), "Finale");
            assert_eq!(plugin.tip(), "Invoke Finale on score XML");
            assert_eq!(
                plugin.build_arguments("C:/scores/out.xml"),
                finale().command_line("C:/scores/out.xml")
            );
        }

        it "parses a deployer-edited descriptor file" {
            let raw = r#"{
                "executable": "C:/Program Files/Finale 2011 Demo/Findemo.exe",
                "title": "Finale",
                "tip": "Invoke Finale on score XML"
            }"#;
            let descriptor: PluginDescriptor =
                serde_json::from_str(raw).expect("Failed to parse descriptor");
            assert_eq!(descriptor, finale());
        }
    }

    describe "registry" {
        before {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
        }

        it "loads descriptors sorted by title" {
            write_descriptor(dir.path(), "finale.json", &finale());
            write_descriptor(dir.path(), "a.json", &PluginDescriptor {
                executable: "/usr/bin/mscore".to_string(),
                title: "MuseScore".to_string(),
                tip: "Open in MuseScore".to_string(),
            });

            let registry = PluginRegistry::load_dir(dir.path()).expect("Failed to load");
            let titles: Vec<&str> = registry.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(titles, vec!["Finale", "MuseScore"]);
        }

        it "skips malformed descriptor files without failing" {
            write_descriptor(dir.path(), "finale.json", &finale());
            std::fs::write(dir.path().join("broken.json"), "{ not json")
                .expect("Failed to write broken file");

            let registry = PluginRegistry::load_dir(dir.path()).expect("Failed to load");
            assert_eq!(registry.len(), 1);
            assert!(registry.get("Finale").is_some());
        }

        it "ignores files without a .json extension" {
            write_descriptor(dir.path(), "finale.json", &finale());
            std::fs::write(dir.path().join("readme.txt"), "not a descriptor")
                .expect("Failed to write file");

            let registry = PluginRegistry::load_dir(dir.path()).expect("Failed to load");
            assert_eq!(registry.len(), 1);
        }

        it "returns an empty registry for an empty directory" {
            let registry = PluginRegistry::load_dir(dir.path()).expect("Failed to load");
            assert!(registry.is_empty());
        }

        it "errors when the directory is missing" {
            let result = PluginRegistry::load_dir(&dir.path().join("nope"));
            assert!(result.is_err());
        }

        it "looks up by exact title only" {
            write_descriptor(dir.path(), "finale.json", &finale());

            let registry = PluginRegistry::load_dir(dir.path()).expect("Failed to load");
            assert!(registry.get("Finale").is_some());
            assert!(registry.get("finale").is_none());
            assert!(registry.get("Sibelius").is_none());
        }
    }
}
