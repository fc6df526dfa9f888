use skipgram_sampler::Pipeline;

fn main() {
    Pipeline::run();
}

// corpus preprocess:
// tokenization, vocabulary building and id encoding happen upstream,
// the input here is one integer-encoded sequence per line, 0 = padding
