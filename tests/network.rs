// End-to-end checks on the network at its default dimensions:
// length 100, 128 gate channels, recurrent width 197, hidden 100.

use burn::{backend::NdArray, prelude::*, tensor::Distribution};
use gated_conv_classifier::{GatedCnnConfig, ModelError, Network, NetworkConfig};

type TestBackend = NdArray;

fn default_network(input_channels: usize) -> Network<TestBackend> {
    NetworkConfig::new(input_channels)
        .init::<TestBackend>(&Default::default())
        .unwrap()
}

fn random_input(dims: [usize; 3]) -> Tensor<TestBackend, 3> {
    Tensor::random(dims, Distribution::Normal(0.0, 1.0), &Default::default())
}

#[test]
fn default_network_scores_each_example() {
    let network = default_network(4);
    let probs   = network.forward(random_input([3, 4, 100]));

    assert_eq!(probs.dims(), [3, 1]);
    for p in probs.into_data().to_vec::<f32>().unwrap() {
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn repeated_forward_is_identical() {
    let network = default_network(2);
    let input   = random_input([2, 2, 100]);

    let a = network.forward(input.clone()).into_data().to_vec::<f32>().unwrap();
    let b = network.forward(input).into_data().to_vec::<f32>().unwrap();
    assert_eq!(a, b);
}

#[test]
fn gates_feed_197_features_into_the_recurrent_layer() {
    let network = default_network(6);
    let normed  = network.input_norm.forward(random_input([1, 6, 100]));

    let short = network.gate_short.forward(normed.clone());
    let long  = network.gate_long.forward(normed);
    assert_eq!(short.dims(), [1, 128, 99]);
    assert_eq!(long.dims(), [1, 128, 98]);

    let joined = gated_conv_classifier::concat_gated(short, long).unwrap();
    assert_eq!(joined.dims(), [1, 128, 197]);

    let (sequence, _) = network.recurrent.forward(joined, None);
    assert_eq!(sequence.dims(), [1, 128, 200]);
}

#[test]
fn gate_width_does_not_depend_on_input_channels() {
    let device = Default::default();
    for channels in [1, 8, 64] {
        let gated = GatedCnnConfig::new(channels, 3).init::<TestBackend>(&device);
        let out   = gated.forward(random_input([2, channels, 20]));
        assert_eq!(out.dims()[1], 128);
    }
}

#[test]
fn mismatched_gate_outputs_cannot_be_joined() {
    let device = Default::default();
    let a = GatedCnnConfig::new(3, 2).init::<TestBackend>(&device).forward(random_input([2, 3, 10]));
    let b = GatedCnnConfig::new(3, 2)
        .with_channels_out(64)
        .init::<TestBackend>(&device)
        .forward(random_input([2, 3, 10]));

    let err = gated_conv_classifier::concat_gated(a, b).unwrap_err();
    assert!(matches!(err, ModelError::ShapeMismatch { stage: "concat", .. }));
}

#[test]
#[should_panic]
fn unchecked_concat_of_mismatched_gates_panics() {
    let a = random_input([2, 128, 5]);
    let b = random_input([2, 64, 5]);
    let _ = Tensor::cat(vec![a, b], 2);
}

#[test]
fn checked_forward_reports_wrong_input_shape() {
    let network = default_network(4);
    let err     = network.try_forward(random_input([2, 5, 100])).unwrap_err();
    assert_eq!(
        err,
        ModelError::ShapeMismatch {
            stage:    "input",
            expected: vec![2, 4, 100],
            actual:   vec![2, 5, 100],
        }
    );
}
