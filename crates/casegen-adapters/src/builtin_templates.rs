//! Built-in TypeScript templates.
//!
//! Every template is static text with `{{VARIABLE}}` placeholders resolved
//! by [`RenderContext`](casegen_core::domain::RenderContext). Use-case
//! templates see `USE_CASE` and `USE_CASE_CAPITALIZED`; project templates
//! see the `PROJECT_*` variables.
//!
//! The leading newline of each template is part of the generated file.

use casegen_core::domain::ArtifactKind;

/// Template source for an artifact kind.
pub fn source(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Controller => CONTROLLER,
        ArtifactKind::Repository => REPOSITORY,
        ArtifactKind::BaseRepository => BASE_REPOSITORY,
        ArtifactKind::Types => TYPES,
        ArtifactKind::EntryPoint => ENTRY_POINT,
        ArtifactKind::Manager => MANAGER,
        ArtifactKind::Implementation => IMPLEMENTATION,
        ArtifactKind::Test => TEST,
        ArtifactKind::Manifest => PACKAGE_JSON,
        ArtifactKind::CompilerConfig => TSCONFIG,
        ArtifactKind::EnvTemplate => ENV,
        ArtifactKind::Readme => README,
    }
}

// ── use case ──────────────────────────────────────────────────────────────────

pub const CONTROLLER: &str = r#"
import { {{USE_CASE}}Data, Input } from "@/cases/{{USE_CASE}}/types";
import {{USE_CASE_CAPITALIZED}}Repository from "@/repositories/{{USE_CASE}}";

export default class {{USE_CASE_CAPITALIZED}}Controller {
  {{USE_CASE}}Repository: {{USE_CASE_CAPITALIZED}}Repository;

  constructor() {
    this.{{USE_CASE}}Repository = new {{USE_CASE_CAPITALIZED}}Repository();
  }

  async execute(params: Input): Promise<{{USE_CASE}}Data> {
    const result = await this.{{USE_CASE}}Repository.findData(params);

    if (result) {
      return Promise.resolve(result);
    }

    return Promise.reject("Data not found");
  }
}
"#;

pub const REPOSITORY: &str = r#"
import { Input, {{USE_CASE}}Data } from "@/cases/{{USE_CASE}}/types";
import Repository from "@/shared/repository";

export default class {{USE_CASE_CAPITALIZED}}Repository extends Repository {
  constructor() {
    super();
  }

  async findData(input: Input): Promise<{{USE_CASE}}Data | undefined> {
    return this.database
      .instance<{{USE_CASE}}Data>("TableName") // Specify the table name here
      .where(input)
      .first();
  }
}
"#;

pub const BASE_REPOSITORY: &str = r#"
import DatabaseService from "@/services/knex";

export default abstract class Repository {
  database: DatabaseService;

  constructor() {
    this.database = new DatabaseService();
  }

  async find<T>(query: string): Promise<T[]> {
    return this.database.instance.raw(query);
  }

  async findOne<T>(id: number): Promise<T | undefined> {
    return this.database.instance<T>('table_name').where({ id }).first();
  }

  async createOne<T>(data: Partial<T>): Promise<T> {
    const [id] = await this.database.instance<T>('table_name').insert(data);
    return this.findOne<T>(id);
  }

  async updateOne<T>(id: number, data: Partial<T>): Promise<T | undefined> {
    await this.database.instance<T>('table_name').where({ id }).update(data);
    return this.findOne<T>(id);
  }

  async deleteOne(id: number): Promise<boolean> {
    const deleted = await this.database.instance('table_name').where({ id }).delete();
    return deleted > 0;
  }
}
"#;

pub const TYPES: &str = r#"
export interface Input {
  // Define your input type here
}

export interface {{USE_CASE}}Data {
  // Define your {{USE_CASE}}Data type here
}

export interface Output {
  // Define your output type here
}
"#;

pub const ENTRY_POINT: &str = r#"
import "dotenv/config";
import { createApp, UseCaseResult, UsecaseType } from "urunner-lib";
import { Logger } from "@/shared/logger";
import { {{USE_CASE}}Data, Input, Output } from "@/cases/{{USE_CASE}}/types";
import { {{USE_CASE_CAPITALIZED}}ServiceImpl } from "@/cases/{{USE_CASE}}/impl";

// Define the dependencies
interface Dependencies {
  logger: Logger;
  {{USE_CASE}}Service: {{USE_CASE_CAPITALIZED}}ServiceImpl;
}

// Define the type for the use case
type {{USE_CASE_CAPITALIZED}}UsecaseType = UsecaseType<
  Input,
  Dependencies,
  UseCaseResult<{{USE_CASE}}Data>
>;

// Create an adapter
const adapter =
  (fn: {{USE_CASE_CAPITALIZED}}UsecaseType) =>
  async (params: Input, dependencies: Dependencies) => {
    return await fn(params, dependencies);
  };

// Define the use case
export const {{USE_CASE}}: {{USE_CASE_CAPITALIZED}}UsecaseType = async (
  params: Input,
  dependencies: Dependencies
) => {
  const { logger: log, {{USE_CASE}}Service } = dependencies;

  try {
    const response = await {{USE_CASE}}Service.execute(params);
    return {
      data: response,
      status: "success",
      message: "{{USE_CASE_CAPITALIZED}} executed successfully.",
    };
  } catch (e) {
    console.log("e", e);
    return {
      data: null,
      message: "Error in {{USE_CASE}}",
      status: "error",
    };
  }
};

// Create the use case instance
const usecase{{USE_CASE_CAPITALIZED}} = createApp(adapter({{USE_CASE}})).attach(
  (dependencies: Dependencies) => {
    dependencies.logger = new Logger();
    dependencies.{{USE_CASE}}Service = new {{USE_CASE_CAPITALIZED}}ServiceImpl();
  }
);

export default usecase{{USE_CASE_CAPITALIZED}};
"#;

pub const MANAGER: &str = r#"
import { {{USE_CASE}}Data, Input } from "@/cases/{{USE_CASE}}/types";

export default interface {{USE_CASE_CAPITALIZED}}ServiceManager {
  execute(params: Input): Promise<{{USE_CASE}}Data | undefined>;
}
"#;

pub const IMPLEMENTATION: &str = r#"
import {{USE_CASE_CAPITALIZED}}ServiceManager from "@/cases/{{USE_CASE}}/manager";
import { {{USE_CASE}}Data, Input } from "@/cases/{{USE_CASE}}/types";
import {{USE_CASE_CAPITALIZED}}Controller from "@/controllers/{{USE_CASE}}Controller";

export class {{USE_CASE_CAPITALIZED}}ServiceImpl implements {{USE_CASE_CAPITALIZED}}ServiceManager {
  async execute(params: Input): Promise<{{USE_CASE}}Data> {
    return new {{USE_CASE_CAPITALIZED}}Controller().execute(params);
  }
}
"#;

pub const TEST: &str = r#"
import usecase{{USE_CASE_CAPITALIZED}}, { {{USE_CASE}} } from "@/cases/{{USE_CASE}}";

describe("{{USE_CASE}}", () => {
  it("exposes the use case", () => {
    expect({{USE_CASE}}).toBeDefined();
    expect(usecase{{USE_CASE_CAPITALIZED}}).toBeDefined();
  });
});
"#;

// ── empty project ─────────────────────────────────────────────────────────────

pub const PACKAGE_JSON: &str = r#"
{
  "name": "{{PROJECT_NAME}}",
  "version": "{{PROJECT_VERSION}}",
  "description": "{{PROJECT_DESCRIPTION}}",
  "main": "index.js",
  "scripts": {
    "start": "ts-node src/index.ts",
    "build": "tsc",
    "test": "jest"
  },
  "author": "{{PROJECT_AUTHOR}}",
  "license": "{{PROJECT_LICENSE}}",
  "dependencies": {
    "dotenv": "^10.0.0"
  },
  "devDependencies": {
    "@types/node": "^16.11.12",
    "@types/jest": "^27.0.3",
    "jest": "^27.4.5",
    "ts-jest": "^27.1.2",
    "ts-node": "^10.4.0",
    "typescript": "^4.5.4"
  }
}
"#;

pub const TSCONFIG: &str = r#"
{
  "compilerOptions": {
    "sourceMap": true,
    "target": "es2020",
    "module": "commonjs",
    "lib": ["es2020"],
    "outDir": "./dist/src",
    "rootDir": "./src",
    "strict": true,
    "esModuleInterop": true,
    "baseUrl": ".",
    "paths": {
      "@/*": ["src/*"]
    },
    "types": ["node", "jest"]
  },
  "include": ["src/**/*"],
  "exclude": ["node_modules"]
}
"#;

pub const ENV: &str = r#"
export const ENV = {
  // Add your environment variables here
  // Example:
  // API_URL: process.env.API_URL || 'http://localhost:3000',
};
"#;

pub const README: &str = r#"
# {{PROJECT_NAME}}

{{PROJECT_DESCRIPTION}}

## Installation
```
npm install
```

## Usage
Add instructions on how to use your project.

## Scripts
- `npm start`: Run the project
- `npm run build`: Build the project
- `npm test`: Run tests

## License
{{PROJECT_LICENSE}}

## Author
{{PROJECT_AUTHOR}}
"#;
