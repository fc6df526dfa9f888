

// imports
use crate::builder::DatasetBuilder;
use crate::config::{files_handling, Config};
use crate::corpus::Corpus;
use crate::dataset::Dataset;

use core::panic;
use std::env;
use std::time::Instant;
use ndarray::{Array1, Array2};
use rayon::ThreadPoolBuilder;

pub struct Pipeline {}

impl Pipeline {

    // runs the main procedure of 3 steps -
    // -> configuration of arguments
    // -> skip-gram example building (checkpointed as one gz artifact)
    // -> export of the target / context / label arrays for training

    pub fn run() {

        println!("entering program...");
        let args: Vec<String> = env::args().collect();

        println!("building parameters...");
        let params = match Config::new(&args) {
            Ok(config) => config.get_params(),
            Err(e) => panic!("{}", e)
        };

        // run the dataset build stage if not saved and given already
        if params.saved_dataset.is_none() || params.saved_dataset.unwrap() == false {

            let timer = Instant::now();
            println!("{}", params);
            println!("loading corpus...");

            let corpus = match Corpus::load(&params.corpus_file, params.sequence_length) {
                Ok(corpus) => corpus,
                Err(e) => panic!("{}", e)
            };
            println!("loaded {} sequences", corpus.sequences.len());

            if let Err(e) = ThreadPoolBuilder::new().num_threads(params.num_threads).build_global() {
                panic!("{}", e)
            }

            let builder = match DatasetBuilder::new(
                params.window_size,
                params.num_ns,
                params.vocab_size,
                params.seed,
                params.subsample,
            ) {
                Ok(builder) => builder,
                Err(e) => panic!("{}", e)
            };

            let dataset = match builder.build(&corpus.sequences) {
                Ok(dataset) => dataset,
                Err(e) => panic!("{}", e)
            };
            println!("built {} training examples", dataset.len());

            if let Err(e) = files_handling::save_output::<Dataset>(&params.output_dir, "dataset", dataset) {
                panic!("{}", e)
            }

            println!("finished dataset build and saved checkpoint, took {} seconds ...", timer.elapsed().as_secs());

        }

        // export stage: re-shape the checkpoint into the arrays the training
        // side shuffles and batches
        let timer = Instant::now();
        println!("starting export part...");

        let dataset_path = (&params.output_dir).to_string() + "/dataset";
        let dataset = match files_handling::read_input::<Dataset>(&dataset_path) {
            Ok(dataset) => dataset,
            Err(e) => panic!("{}", e)
        };

        println!("loaded checkpoint of {} examples", dataset.len());
        let (targets, contexts, labels) = match dataset.to_arrays() {
            Ok(arrays) => arrays,
            Err(e) => panic!("{}", e)
        };

        if let Err(e) = files_handling::save_output::<Array1<i64>>(&params.output_dir, "targets", targets) { panic!("{}", e) }
        if let Err(e) = files_handling::save_output::<Array2<i64>>(&params.output_dir, "contexts", contexts) { panic!("{}", e) }
        if let Err(e) = files_handling::save_output::<Array2<i64>>(&params.output_dir, "labels", labels) { panic!("{}", e) }

        println!("finished export, saved arrays. Took {} seconds ...", timer.elapsed().as_secs());

    }

}
