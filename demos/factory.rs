/// Factory surface and `compose` example
use search_params_helper::{Mutation, ParamsFactory, compose, search_params_factory};

fn main() {
    let mut params = search_params_factory("?key1=value1&key2=value2&key3=value3&key5=value5");

    // Every mutation hands back the serialized query string
    println!("{}", params.add_param("key6", "a&b")); // ...&key6=a%26b
    println!();

    // Run several edits, read the result once
    let query = params.compose([
        Mutation::add_or_replace_list([("key1", "replacedValue1"), ("key4", "value4")]),
        Mutation::remove_list(["key2", "key5"]),
    ]);
    println!("compose: {}", query); // key1=replacedValue1&key3=value3&key6=a%26b&key4=value4
    println!();

    // Closures work too
    let query = compose!(params, |p: &mut ParamsFactory| {
        p.remove_param("key6");
    });
    println!("compose!: {}", query); // key1=replacedValue1&key3=value3&key4=value4
}
