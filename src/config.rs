

use serde_json::Value;
use std::{fs, error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub struct JsonTypes {
    pub corpus_file: String,
    pub output_dir: String,
    pub window_size: usize,
    pub num_ns: usize,
    pub vocab_size: usize,
    pub sequence_length: usize,
    pub seed: u64,
    pub subsample: bool,
    pub saved_dataset: Option<bool>,
    pub num_threads: usize,
}


impl Display for JsonTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "using hyper-params:
        corpus_file: {}
        output_dir: {}
        window_size: {}
        num_ns: {}
        vocab_size: {}
        sequence_length: {}
        seed: {}
        subsample: {}
        saved_dataset: {:?}
        num_threads: {}",
        self.corpus_file, self.output_dir, self.window_size, self.num_ns, self.vocab_size,
        self.sequence_length, self.seed, self.subsample, self.saved_dataset, self.num_threads)
    }
}

pub struct Config {
    params: JsonTypes
}

impl Config {

    pub fn get_params(&self) -> JsonTypes {
        return self.params.clone()
    }

    pub fn new(args: &[String]) -> Result<Config, Box<dyn Error>> {

        if args.len() != 2 {
            return Err(format!("input should be a path to json file only").into());
        }

        // parse input json
        let f = fs::File::open(&args[1]).expect("cannot open json file");
        let json: Value = serde_json::from_reader(f).expect("cannot read json file");

        // validate input and output in json
        let corpus_file = json.get("corpus_file").expect("corpus_file was not supplied throught json").as_str().expect("cannot cast input file to string");
        let output_dir = json.get("output_dir").expect("output_dir was not supplied throught json").as_str().expect("cannot cast output path to string");

        // handle default vs input parameters
        let window_size = match json.get("window_size") {
            Some(window_size) => window_size.as_u64().expect("panic since given window_size is not numeric"),
            None => 2
        };
        let num_ns = match json.get("num_ns") {
            Some(num_ns) => num_ns.as_u64().expect("panic since given num_ns is not numeric"),
            None => 4
        };
        let vocab_size = match json.get("vocab_size") {
            Some(vocab_size) => vocab_size.as_u64().expect("panic since given vocab_size is not numeric"),
            None => 4096
        };
        let sequence_length = match json.get("sequence_length") {
            Some(sequence_length) => sequence_length.as_u64().expect("panic since given sequence_length is not numeric"),
            None => 10
        };
        let seed = match json.get("seed") {
            Some(seed) => seed.as_u64().expect("panic since given seed is not numeric"),
            None => 42
        };
        let subsample = match json.get("subsample") {
            Some(subsample) => subsample.as_bool().expect("panic since given subsample is not boolean"),
            None => true
        };
        let saved_dataset = match json.get("saved_dataset") {
            Some(saved_dataset) => Some(saved_dataset.as_bool().expect("panic since given saved_dataset is not boolean")),
            None => None
        };
        let num_threads = match json.get("num_threads") {
            Some(num_threads) => num_threads.as_u64().expect("panic since given num_threads is not numeric"),
            None => 4
        };

        let params = JsonTypes {
            corpus_file: corpus_file.to_owned(),
            output_dir: output_dir.to_owned(),
            window_size: window_size as usize,
            num_ns: num_ns as usize,
            vocab_size: vocab_size as usize,
            sequence_length: sequence_length as usize,
            seed: seed,
            subsample: subsample,
            saved_dataset: saved_dataset,
            num_threads: num_threads as usize,
        };

        Ok (
            Self {
                params: params
            }
        )
    }

}


pub mod files_handling {

    use crate::dataset::Dataset;

    use ndarray::{Array1, Array2};
    use ndarray_npy::write_npy;
    use std::{fs::{self, File}, error::Error, io::{BufWriter, BufReader}};
    use flate2::{Compression, read::GzDecoder};
    use flate2::write::GzEncoder;

    pub fn read_input<R: ReadFile>(file_path: &str) -> Result<<R as ReadFile>::Item, <R as ReadFile>::Error> {
        let input = <R as ReadFile>::read_file(file_path)?;
        Ok(input)
    }

    pub fn save_output<S: SaveFile>(output_dir: &str, file_name: &str, item: S) -> Result<(), <S as SaveFile>::Error> {

        // create output folder
        if let Err(e) = fs::create_dir_all(output_dir) {
            panic!("{}", e)
        }

        // SaveFile can be a Dataset checkpoint or an exported array
        item.save_file(output_dir, file_name)?;
        return Ok(())

    }

    pub trait ReadFile {
        type Error;
        type Item;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error>;
    }

    // the dataset checkpoint is a gz-compressed bincode blob, the artifact
    // handed from the build stage to the export stage
    impl ReadFile for Dataset {
        type Error = Box<dyn Error>;
        type Item = Self;
        fn read_file(file_path: &str) -> Result<Self::Item, Self::Error> {

            let in_file = file_path.to_string() + ".gz";
            let f = BufReader::new(File::open(in_file)?);
            let reader = GzDecoder::new(f);
            let item: Dataset = bincode::deserialize_from(reader)?;
            return Ok(item)
        }
    }

    pub trait SaveFile {
        type Error;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error>;
    }

    impl SaveFile for Dataset {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {

            let out = output_dir.to_string() + "/" + file_name + ".gz";
            let f = BufWriter::new(File::create(out)?);
            let mut writer = GzEncoder::new(f, Compression::default());
            bincode::serialize_into(&mut writer, self)?;
            writer.finish()?;
            return Ok(())
        }
    }

    impl SaveFile for Array1<i64> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {

            let out = output_dir.to_string() + "/" + file_name + ".npy";
            write_npy(out, self)?;
            Ok(())
        }
    }

    impl SaveFile for Array2<i64> {
        type Error = Box<dyn Error>;
        fn save_file(&self, output_dir: &str, file_name: &str) -> Result<(), Self::Error> {

            let out = output_dir.to_string() + "/" + file_name + ".npy";
            write_npy(out, self)?;
            Ok(())
        }
    }

}
