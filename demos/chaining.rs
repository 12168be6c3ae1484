/// `SearchParams` chaining example
use search_params_helper::SearchParams;

fn main() {
    // Parse a query string
    let mut params = SearchParams::create("?name=John&age=30&city=Tokyo");

    println!("name: {:?}", params.get_param("name")); // Some("John")
    println!("zip: {:?}", params.get_param("zip")); // None
    println!();

    // Chain mutations
    params
        .add_param("country", "Japan")
        .add_or_replace_param("age", "31")
        .remove_param("city");
    println!("After chain: {}", params); // name=John&age=31&country=Japan
    println!();

    // Repeated keys are kept, reads report the first value
    params.add_param("name", "Jane");
    println!("get_param: {:?}", params.get_param("name")); // Some("John")
    println!("get_all: {:?}", params.get_all("name")); // ["John", "Jane"]
    println!();

    println!("All parameters:");
    for (key, value) in params.get_all_params().iter() {
        println!("  {} = {}", key, value);
    }
}
