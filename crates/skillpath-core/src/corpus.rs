//! The static question catalog.
//!
//! The built-in bank covers five categories at three difficulty tiers. Records
//! are constructed once at startup and never mutated afterwards.

use crate::model::{Category, CategoryFilter, Difficulty, QuestionRecord};

/// Static catalog of question records.
#[derive(Debug, Clone)]
pub struct QuestionCorpus {
    records: Vec<QuestionRecord>,
}

impl QuestionCorpus {
    /// Build a corpus from arbitrary records.
    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    /// The built-in question bank.
    pub fn builtin() -> Self {
        Self {
            records: builtin_bank(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Records matching a category filter. An empty filter result falls back
    /// to the full corpus so a request never silently gets an empty pool.
    pub fn eligible(&self, filter: CategoryFilter) -> Vec<&QuestionRecord> {
        let filtered: Vec<&QuestionRecord> = match filter.category() {
            Some(category) => self
                .records
                .iter()
                .filter(|r| r.category == category)
                .collect(),
            None => self.records.iter().collect(),
        };
        if filtered.is_empty() {
            self.records.iter().collect()
        } else {
            filtered
        }
    }
}

fn q(
    text: &str,
    options: [&str; 4],
    correct_index: u8,
    category: Category,
    difficulty: Difficulty,
    explanation: &str,
    level_range: (u32, u32),
) -> QuestionRecord {
    QuestionRecord {
        text: text.to_string(),
        options: options.map(str::to_string),
        correct_index,
        category,
        difficulty,
        explanation: explanation.to_string(),
        level_range: Some(level_range),
    }
}

#[rustfmt::skip]
fn builtin_bank() -> Vec<QuestionRecord> {
    use Category::*;
    use Difficulty::*;

    vec![
        // -------- algorithms / easy --------
        q("What is the time complexity of binary search?",
          ["O(n)", "O(log n)", "O(n^2)", "O(1)"], 1, Algorithms, Easy,
          "Binary search has O(log n) complexity because it halves the search space each iteration.",
          (1, 8)),
        q("What is an array?",
          ["A function type", "A collection of elements stored at contiguous memory locations", "A type of loop", "A database table"],
          1, Algorithms, Easy,
          "An array is a data structure that stores elements of the same type in contiguous memory locations.",
          (1, 5)),
        q("What does FIFO stand for in queue data structures?",
          ["First In First Out", "First In Final Output", "Fast Input Fast Output", "Fixed Input Fixed Output"],
          0, Algorithms, Easy,
          "FIFO means First In First Out - the first element added is the first one removed.",
          (1, 6)),
        q("What is the time complexity of accessing an element in an array by index?",
          ["O(n)", "O(log n)", "O(n^2)", "O(1)"], 3, Algorithms, Easy,
          "Array access by index is O(1) constant time because elements are stored at contiguous memory locations.",
          (1, 7)),
        q("What is a stack data structure?",
          ["FIFO structure", "LIFO structure", "Random access structure", "Sorted structure"],
          1, Algorithms, Easy,
          "A stack is a LIFO (Last In First Out) data structure where the last element added is the first removed.",
          (1, 6)),
        // -------- algorithms / medium --------
        q("What is recursion?",
          ["A loop type", "A function that calls itself", "A data structure", "An error type"],
          1, Algorithms, Medium,
          "Recursion is a programming technique where a function calls itself to solve smaller instances of the same problem.",
          (6, 15)),
        q("What is Big O notation used for?",
          ["Measuring code length", "Describing algorithm efficiency", "Formatting output", "Managing memory"],
          1, Algorithms, Medium,
          "Big O notation describes the upper bound of an algorithm's time or space complexity.",
          (5, 14)),
        q("What is a hash table?",
          ["A type of database", "A data structure using key-value pairs with O(1) average lookup", "A sorting algorithm", "A file format"],
          1, Algorithms, Medium,
          "A hash table is a data structure that stores key-value pairs and provides O(1) average time complexity for lookups.",
          (7, 16)),
        q("What is the worst-case time complexity of quicksort?",
          ["O(n)", "O(n log n)", "O(n^2)", "O(log n)"], 2, Algorithms, Medium,
          "Quicksort's worst case is O(n^2) when the pivot selection consistently results in unbalanced partitions.",
          (8, 17)),
        q("What is a linked list?",
          ["An array variant", "A sequence of nodes where each node points to the next", "A tree structure", "A hash function"],
          1, Algorithms, Medium,
          "A linked list is a linear data structure where elements are stored in nodes that contain data and a reference to the next node.",
          (5, 14)),
        q("What is the time complexity of inserting at the beginning of a linked list?",
          ["O(n)", "O(log n)", "O(n^2)", "O(1)"], 3, Algorithms, Medium,
          "Inserting at the beginning of a linked list is O(1) because you only need to update the head pointer.",
          (6, 15)),
        // -------- algorithms / hard --------
        q("What is memoization?",
          ["A memory type", "Caching function results to avoid redundant calculations", "A debugging technique", "A testing method"],
          1, Algorithms, Hard,
          "Memoization is an optimization technique that caches the results of expensive function calls to avoid redundant calculations.",
          (15, 30)),
        q("What is the time complexity of Dijkstra's algorithm with a binary heap?",
          ["O(V)", "O(E log V)", "O(V^2)", "O(E + V)"], 1, Algorithms, Hard,
          "Dijkstra's algorithm with a binary heap has O(E log V) complexity where E is edges and V is vertices.",
          (18, 30)),
        q("What is dynamic programming?",
          ["Writing code dynamically", "Breaking problems into overlapping subproblems and storing their solutions", "Runtime code generation", "Automatic memory management"],
          1, Algorithms, Hard,
          "Dynamic programming solves complex problems by breaking them into simpler overlapping subproblems and storing results to avoid recomputation.",
          (16, 30)),
        q("What is the amortized time complexity of adding to a dynamic array?",
          ["O(n)", "O(log n)", "O(n^2)", "O(1)"], 3, Algorithms, Hard,
          "While individual insertions may trigger O(n) resizing, the amortized cost across many insertions is O(1).",
          (17, 30)),
        q("What is a balanced binary search tree?",
          ["A tree with equal values", "A BST where height difference between subtrees is bounded", "A complete binary tree", "A tree with no duplicates"],
          1, Algorithms, Hard,
          "A balanced BST maintains a bounded height difference between left and right subtrees, ensuring O(log n) operations.",
          (16, 30)),

        // -------- frontend / easy --------
        q("What does CSS stand for?",
          ["Creative Style Sheets", "Cascading Style Sheets", "Computer Style Sheets", "Colorful Style Sheets"],
          1, Frontend, Easy,
          "CSS stands for Cascading Style Sheets, used for styling web pages.",
          (1, 6)),
        q("What is the difference between let and const in JavaScript?",
          ["No difference", "let can be reassigned, const cannot", "const is faster", "let is deprecated"],
          1, Frontend, Easy,
          "let allows variable reassignment while const creates a read-only reference that cannot be reassigned.",
          (1, 7)),
        q("What does HTML stand for?",
          ["Hyper Text Markup Language", "High Tech Modern Language", "Hyper Transfer Markup Language", "Home Tool Markup Language"],
          0, Frontend, Easy,
          "HTML stands for HyperText Markup Language, the standard language for creating web pages.",
          (1, 5)),
        q("Which HTML tag is used for the largest heading?",
          ["<h6>", "<heading>", "<h1>", "<head>"], 2, Frontend, Easy,
          "<h1> is used for the largest heading in HTML, with <h6> being the smallest.",
          (1, 5)),
        q("What is the CSS property to change text color?",
          ["text-color", "font-color", "color", "foreground"], 2, Frontend, Easy,
          "The 'color' property in CSS is used to change the text color of an element.",
          (1, 6)),
        // -------- frontend / medium --------
        q("What is React's virtual DOM?",
          ["A browser API", "An in-memory representation of the real DOM", "A database", "A server component"],
          1, Frontend, Medium,
          "React's virtual DOM is an in-memory representation that React uses to optimize updates to the real DOM.",
          (8, 18)),
        q("What is a closure in JavaScript?",
          ["A way to close files", "A function that has access to its outer scope", "A type of loop", "An error handler"],
          1, Frontend, Medium,
          "A closure is a function that retains access to variables from its outer (enclosing) scope even after that scope has finished executing.",
          (7, 16)),
        q("What is the purpose of the useEffect hook in React?",
          ["State management", "Performing side effects", "Routing", "Form validation"],
          1, Frontend, Medium,
          "useEffect is a React hook for performing side effects like data fetching, subscriptions, or DOM manipulation.",
          (9, 18)),
        q("What is CSS Flexbox used for?",
          ["Animation", "One-dimensional layout", "Database queries", "Server rendering"],
          1, Frontend, Medium,
          "Flexbox is a CSS layout model designed for one-dimensional layouts, making it easy to align and distribute space among items.",
          (6, 15)),
        q("What is event bubbling in JavaScript?",
          ["Creating events", "Events propagating from child to parent elements", "Canceling events", "Event scheduling"],
          1, Frontend, Medium,
          "Event bubbling is when an event triggered on a child element propagates up through its parent elements in the DOM tree.",
          (8, 17)),
        q("What is the purpose of useState in React?",
          ["Routing", "Managing component state", "Making API calls", "Styling components"],
          1, Frontend, Medium,
          "useState is a React hook that allows functional components to have state variables.",
          (7, 16)),
        // -------- frontend / hard --------
        q("What is React's reconciliation algorithm?",
          ["A sorting algorithm", "The process of comparing virtual DOM trees to update the real DOM efficiently", "A security feature", "A routing mechanism"],
          1, Frontend, Hard,
          "Reconciliation is React's diffing algorithm that compares virtual DOM trees to determine the minimal set of changes needed for the real DOM.",
          (17, 30)),
        q("What is tree shaking in webpack?",
          ["Reordering code", "Removing unused code from bundles", "Code compression", "Syntax checking"],
          1, Frontend, Hard,
          "Tree shaking is a technique used to eliminate dead code by analyzing import/export statements to remove unused modules.",
          (16, 30)),
        q("What is the purpose of React.memo?",
          ["Memory allocation", "Memoizing component rendering to prevent unnecessary re-renders", "State persistence", "Error logging"],
          1, Frontend, Hard,
          "React.memo is a higher-order component that memoizes the rendered output, preventing re-renders if props haven't changed.",
          (15, 30)),
        q("What is hydration in server-side rendering?",
          ["Adding water to servers", "Attaching event handlers to server-rendered HTML", "Database optimization", "Cache warming"],
          1, Frontend, Hard,
          "Hydration is the process where client-side JavaScript takes over server-rendered HTML by attaching event handlers and making it interactive.",
          (18, 30)),

        // -------- backend / easy --------
        q("Which HTTP method is used to update a resource?",
          ["GET", "POST", "PUT", "DELETE"], 2, Backend, Easy,
          "PUT is the HTTP method used to update or replace an existing resource.",
          (1, 7)),
        q("What is a primary key in a database?",
          ["Any column", "A unique identifier for each row", "The first column", "A foreign key reference"],
          1, Backend, Easy,
          "A primary key uniquely identifies each record in a database table.",
          (1, 6)),
        q("What is a REST API?",
          ["A database type", "An architectural style for web services", "A programming language", "A testing framework"],
          1, Backend, Easy,
          "REST (Representational State Transfer) is an architectural style for designing networked applications using HTTP methods.",
          (1, 8)),
        q("What HTTP status code indicates success?",
          ["404", "500", "200", "301"], 2, Backend, Easy,
          "HTTP status code 200 indicates that the request was successful.",
          (1, 6)),
        q("What does JSON stand for?",
          ["JavaScript Object Notation", "Java Standard Object Notation", "JavaScript Online Notation", "Java Serialized Object Notation"],
          0, Backend, Easy,
          "JSON stands for JavaScript Object Notation, a lightweight data interchange format.",
          (1, 5)),
        // -------- backend / medium --------
        q("What is the purpose of middleware in Express.js?",
          ["Database connection", "Process requests before reaching routes", "Render views", "Manage sessions only"],
          1, Backend, Medium,
          "Middleware functions in Express.js process requests before they reach route handlers.",
          (7, 16)),
        q("What is a foreign key in a database?",
          ["A key from another country", "A column that references a primary key in another table", "An encryption key", "A backup key"],
          1, Backend, Medium,
          "A foreign key is a column that creates a relationship between two tables by referencing the primary key of another table.",
          (6, 15)),
        q("What is connection pooling?",
          ["Swimming pool management", "Reusing database connections instead of creating new ones", "Network load balancing", "Thread management"],
          1, Backend, Medium,
          "Connection pooling maintains a cache of database connections that can be reused, improving performance.",
          (9, 18)),
        q("What is rate limiting?",
          ["Speed optimization", "Restricting the number of requests a user can make in a time period", "Database throttling", "Memory management"],
          1, Backend, Medium,
          "Rate limiting controls the rate of requests a user can make to an API to prevent abuse and ensure fair usage.",
          (8, 17)),
        q("What is an ORM?",
          ["Object Relational Mapping", "Online Resource Manager", "Output Render Module", "Object Runtime Memory"],
          0, Backend, Medium,
          "ORM (Object Relational Mapping) is a technique that maps database tables to classes, allowing developers to interact with databases using objects.",
          (7, 16)),
        // -------- backend / hard --------
        q("What is database sharding?",
          ["Deleting old data", "Horizontally partitioning data across multiple databases", "Data encryption", "Backup strategy"],
          1, Backend, Hard,
          "Sharding is a database architecture pattern that horizontally partitions data across multiple database instances for scalability.",
          (17, 30)),
        q("What is eventual consistency in distributed systems?",
          ["Immediate data sync", "Data will become consistent given enough time without new updates", "Data validation", "Error handling"],
          1, Backend, Hard,
          "Eventual consistency guarantees that, given enough time without new updates, all replicas will converge to the same value.",
          (18, 30)),
        q("What is the CAP theorem?",
          ["A coding standard", "States that a distributed system can only guarantee two of three: Consistency, Availability, Partition tolerance", "A security protocol", "A testing methodology"],
          1, Backend, Hard,
          "CAP theorem states that a distributed data store can only provide two of three guarantees: Consistency, Availability, and Partition tolerance.",
          (19, 30)),
        q("What is a message queue?",
          ["An email system", "A system for asynchronous communication between services using messages", "A database type", "A logging mechanism"],
          1, Backend, Hard,
          "A message queue enables asynchronous communication between services by storing messages until they can be processed.",
          (16, 30)),

        // -------- data / easy --------
        q("What is SQL used for?",
          ["Styling web pages", "Managing and querying relational databases", "Creating animations", "Building mobile apps"],
          1, Data, Easy,
          "SQL (Structured Query Language) is used for managing and querying data in relational database systems.",
          (1, 7)),
        q("What is a database table?",
          ["A furniture piece", "A structured collection of data organized in rows and columns", "A type of graph", "A programming function"],
          1, Data, Easy,
          "A database table is a collection of related data organized in rows (records) and columns (fields).",
          (1, 5)),
        q("What does SELECT do in SQL?",
          ["Deletes data", "Retrieves data from a database", "Creates tables", "Updates records"],
          1, Data, Easy,
          "The SELECT statement is used to retrieve data from one or more tables in a database.",
          (1, 6)),
        // -------- data / medium --------
        q("What is the difference between SQL and NoSQL databases?",
          ["SQL is faster", "SQL uses structured tables, NoSQL uses flexible schemas", "NoSQL is always better", "They are the same"],
          1, Data, Medium,
          "SQL databases use structured tables with predefined schemas, while NoSQL databases offer flexible, schema-less data storage.",
          (7, 16)),
        q("What is the purpose of indexes in databases?",
          ["Store data", "Speed up data retrieval", "Encrypt data", "Delete records"],
          1, Data, Medium,
          "Indexes are data structures that speed up data retrieval operations by providing quick access paths to rows.",
          (8, 17)),
        q("What is a JOIN in SQL?",
          ["Connecting to a database", "Combining rows from two or more tables based on a related column", "Creating a backup", "Sorting data"],
          1, Data, Medium,
          "A JOIN clause combines rows from two or more tables based on a related column between them.",
          (6, 15)),
        q("What is data aggregation?",
          ["Deleting data", "Combining multiple data points into a summary", "Encrypting data", "Backing up data"],
          1, Data, Medium,
          "Data aggregation is the process of gathering and summarizing data, often using functions like COUNT, SUM, AVG.",
          (7, 16)),
        // -------- data / hard --------
        q("What is normalization in databases?",
          ["Making data smaller", "Organizing data to reduce redundancy", "Encrypting data", "Deleting duplicates"],
          1, Data, Hard,
          "Normalization is the process of organizing a database to reduce data redundancy and improve data integrity.",
          (15, 30)),
        q("What is ACID in database transactions?",
          ["A chemical property", "Atomicity, Consistency, Isolation, Durability", "A query language", "A backup method"],
          1, Data, Hard,
          "ACID (Atomicity, Consistency, Isolation, Durability) is a set of properties that guarantee reliable database transactions.",
          (16, 30)),
        q("What is a data warehouse?",
          ["A physical storage facility", "A system for reporting and analysis using data from multiple sources", "A backup system", "A type of NoSQL database"],
          1, Data, Hard,
          "A data warehouse is a central repository that aggregates data from multiple sources for analysis and reporting.",
          (17, 30)),

        // -------- security / easy --------
        q("What is SQL injection?",
          ["A database optimization technique", "An attack that inserts malicious SQL code", "A way to speed up queries", "A backup method"],
          1, Security, Easy,
          "SQL injection is an attack where malicious SQL code is inserted into application queries to manipulate the database.",
          (1, 8)),
        q("What is HTTPS?",
          ["A programming language", "A secure version of HTTP using encryption", "A database type", "A file format"],
          1, Security, Easy,
          "HTTPS is the secure version of HTTP that encrypts communication between the browser and server using TLS/SSL.",
          (1, 6)),
        q("What is a password hash?",
          ["An encrypted password", "A one-way transformation of a password for secure storage", "A password hint", "A temporary password"],
          1, Security, Easy,
          "Password hashing transforms passwords into fixed-length strings that cannot be reversed, providing secure storage.",
          (1, 7)),
        // -------- security / medium --------
        q("What is XSS (Cross-Site Scripting)?",
          ["A CSS framework", "An attack that injects malicious scripts into web pages", "A browser feature", "A server configuration"],
          1, Security, Medium,
          "XSS is a security vulnerability that allows attackers to inject malicious scripts into web pages viewed by others.",
          (7, 16)),
        q("What is CORS?",
          ["A programming language", "Cross-Origin Resource Sharing security mechanism", "A database type", "A CSS property"],
          1, Security, Medium,
          "CORS (Cross-Origin Resource Sharing) is a security mechanism that controls how web pages can request resources from different domains.",
          (8, 17)),
        q("What is the difference between authentication and authorization?",
          ["They are the same", "Authentication verifies identity, authorization grants access", "Authorization comes first", "Neither is important"],
          1, Security, Medium,
          "Authentication verifies who you are, while authorization determines what you're allowed to do.",
          (6, 15)),
        q("What is CSRF?",
          ["A file format", "Cross-Site Request Forgery attack", "A compression algorithm", "A caching mechanism"],
          1, Security, Medium,
          "CSRF is an attack that tricks authenticated users into submitting unwanted requests to a web application.",
          (9, 18)),
        q("What is input validation?",
          ["User interface design", "Checking user input for correctness and safety before processing", "Database indexing", "Network monitoring"],
          1, Security, Medium,
          "Input validation ensures that user-provided data meets expected criteria and is safe to process, preventing many attacks.",
          (5, 14)),
        // -------- security / hard --------
        q("What is JWT token hijacking?",
          ["Creating tokens", "Stealing and misusing authentication tokens", "Token refresh", "Token generation"],
          1, Security, Hard,
          "JWT hijacking occurs when an attacker steals a valid JWT token and uses it to impersonate the legitimate user.",
          (16, 30)),
        q("What is defense in depth?",
          ["Deep learning security", "Using multiple layers of security controls throughout a system", "Network depth analysis", "Code obfuscation"],
          1, Security, Hard,
          "Defense in depth is a security strategy that uses multiple layers of controls, so if one fails, others provide protection.",
          (17, 30)),
        q("What is a zero-day vulnerability?",
          ["A minor bug", "A vulnerability unknown to software vendors and without a patch", "A testing technique", "A backup strategy"],
          1, Security, Hard,
          "A zero-day vulnerability is a software flaw unknown to the vendor and has no available patch, making it highly dangerous.",
          (18, 30)),
        q("What is the OWASP Top 10?",
          ["A ranking of websites", "A list of the most critical web application security risks", "A testing framework", "A coding standard"],
          1, Security, Hard,
          "The OWASP Top 10 is a regularly updated list of the most critical security risks to web applications.",
          (15, 30)),
    ]
}
