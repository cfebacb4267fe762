use grid_skirmish_core::serialization;

const IN_FOLDER: &str = "../../json-files";
const OUT_FOLDER: &str = "../generated-files/lineups";

// Converts every JSON lineup into the MessagePack lineup shipped with the game
fn main() {
    let out_folder = std::path::Path::new(OUT_FOLDER);
    let _ = std::fs::create_dir_all(out_folder);
    for f in std::fs::read_dir(IN_FOLDER).unwrap() {
        let file = f.unwrap();
        if file.file_type().unwrap().is_file() {
            let mut path = file.path();
            let reader = std::io::BufReader::new(std::fs::File::open(&path).unwrap());
            let lineup: serialization::Lineup = serde_json::from_reader(reader).unwrap();
            if let Err(e) = lineup.validate() {
                eprintln!("skipping {}: {}", path.display(), e);
                continue;
            }
            path.set_extension("lineup");
            let out_path = out_folder.join(path.file_name().unwrap());
            let mut out_file = std::fs::File::create(out_path).unwrap();
            rmp_serde::encode::write(&mut out_file, &lineup).unwrap();
        }
    }
}
